use std::collections::HashSet;

use cryptomines_api::domains::service::{mode_services, Mode, ServiceName, SIMULATOR_SERVICES};

#[test]
fn known_services_round_trip_through_wire_names() {
    for service in ServiceName::known() {
        assert!(service.is_known());
        assert_eq!(&ServiceName::from(service.as_str()), service);
    }
    assert_eq!(ServiceName::from("cryptomines_wallet"), ServiceName::Wallet);
    assert_eq!(ServiceName::from("daemon"), ServiceName::Daemon);
    assert_eq!(ServiceName::Events.to_string(), "wallet_ui");
}

#[test]
fn unknown_names_are_kept_verbatim() {
    let other: ServiceName = "cryptomines_bridge".parse().unwrap();
    assert_eq!(other, ServiceName::Other("cryptomines_bridge".to_string()));
    assert!(!other.is_known());
    assert_eq!(other.as_str(), "cryptomines_bridge");
}

#[test]
fn services_serialize_as_plain_strings() {
    assert_eq!(
        serde_json::to_string(&ServiceName::Farmer).unwrap(),
        r#""cryptomines_farmer""#
    );
    let decoded: Vec<ServiceName> =
        serde_json::from_str(r#"["cryptomines_harvester","somebody_else"]"#).unwrap();
    assert_eq!(
        decoded,
        vec![
            ServiceName::Harvester,
            ServiceName::Other("somebody_else".to_string())
        ]
    );
}

#[test]
fn mode_tables() {
    assert_eq!(mode_services(Mode::Wallet), &[ServiceName::Wallet]);
    assert_eq!(
        mode_services(Mode::Farming),
        &[
            ServiceName::Wallet,
            ServiceName::FullNode,
            ServiceName::Farmer,
            ServiceName::Harvester,
        ]
    );
    assert_eq!(SIMULATOR_SERVICES, &[ServiceName::Wallet, ServiceName::Simulator]);
}

#[test]
fn modes_parse_from_text() {
    assert_eq!("wallet".parse::<Mode>().unwrap(), Mode::Wallet);
    assert_eq!("farming".parse::<Mode>().unwrap(), Mode::Farming);
    assert!("mining".parse::<Mode>().is_err());
    assert_eq!(Mode::default(), Mode::Farming);
    assert_eq!(Mode::Wallet.as_str(), "wallet");
    assert_eq!(serde_json::to_string(&Mode::Farming).unwrap(), r#""farming""#);
}

#[test]
fn names_compare_by_wire_string() {
    let spelled = ServiceName::Other("cryptomines_wallet".to_string());
    assert_eq!(spelled, ServiceName::Wallet);
    assert_ne!(spelled, ServiceName::Other("cryptomines_bridge".to_string()));
    assert_ne!(ServiceName::Events, ServiceName::Daemon);

    let mut seen = HashSet::new();
    seen.insert(ServiceName::Wallet);
    assert!(!seen.insert(spelled));
    assert!(seen.insert(ServiceName::Other("wallet_ui".to_string())));
    assert!(seen.contains(&ServiceName::Events));
    assert_eq!(seen.len(), 2);
}
