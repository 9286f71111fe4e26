use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone)]
pub enum ServiceName {
    Wallet,
    FullNode,
    Farmer,
    Harvester,
    Simulator,
    Daemon,
    Plotter,
    Timelord,
    Introducer,
    Crawler,
    DataLayer,
    DataLayerServer,
    Events,
    Other(String),
}

const KNOWN: &[ServiceName] = &[
    ServiceName::Wallet,
    ServiceName::FullNode,
    ServiceName::Farmer,
    ServiceName::Harvester,
    ServiceName::Simulator,
    ServiceName::Daemon,
    ServiceName::Plotter,
    ServiceName::Timelord,
    ServiceName::Introducer,
    ServiceName::Crawler,
    ServiceName::DataLayer,
    ServiceName::DataLayerServer,
    ServiceName::Events,
];

impl ServiceName {
    pub fn as_str(&self) -> &str {
        match self {
            ServiceName::Wallet => "cryptomines_wallet",
            ServiceName::FullNode => "cryptomines_full_node",
            ServiceName::Farmer => "cryptomines_farmer",
            ServiceName::Harvester => "cryptomines_harvester",
            ServiceName::Simulator => "cryptomines_full_node_simulator",
            ServiceName::Daemon => "daemon",
            ServiceName::Plotter => "cryptomines_plotter",
            ServiceName::Timelord => "cryptomines_timelord",
            ServiceName::Introducer => "cryptomines_introducer",
            ServiceName::Crawler => "cryptomines_crawler",
            ServiceName::DataLayer => "cryptomines_data_layer",
            ServiceName::DataLayerServer => "cryptomines_data_layer_http",
            ServiceName::Events => "wallet_ui",
            ServiceName::Other(name) => name.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ServiceName::Other(_))
    }

    pub fn known() -> &'static [ServiceName] {
        KNOWN
    }
}

// Equality follows the wire string, so `Other` spelling a known name
// matches that variant.
impl PartialEq for ServiceName {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ServiceName {}

impl Hash for ServiceName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for ServiceName {
    fn from(value: &str) -> Self {
        KNOWN
            .iter()
            .find(|service| service.as_str() == value)
            .cloned()
            .unwrap_or_else(|| ServiceName::Other(value.to_string()))
    }
}

impl From<String> for ServiceName {
    fn from(value: String) -> Self {
        ServiceName::from(value.as_str())
    }
}

impl FromStr for ServiceName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ServiceName::from(s))
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ServiceName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ServiceName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(ServiceName::from(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Wallet,
    #[default]
    Farming,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Wallet => "wallet",
            Mode::Farming => "farming",
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wallet" => Ok(Mode::Wallet),
            "farming" => Ok(Mode::Farming),
            other => Err(format!("unknown mode `{other}`")),
        }
    }
}

pub const SIMULATOR_SERVICES: &[ServiceName] = &[ServiceName::Wallet, ServiceName::Simulator];

const WALLET_SERVICES: &[ServiceName] = &[ServiceName::Wallet];
const FARMING_SERVICES: &[ServiceName] = &[
    ServiceName::Wallet,
    ServiceName::FullNode,
    ServiceName::Farmer,
    ServiceName::Harvester,
];

pub fn mode_services(mode: Mode) -> &'static [ServiceName] {
    match mode {
        Mode::Wallet => WALLET_SERVICES,
        Mode::Farming => FARMING_SERVICES,
    }
}
