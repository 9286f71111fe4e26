use serde_json::json;

use cryptomines_api::codec::case::{camel_to_snake, snake_to_camel, to_camel_case, to_snake_case, KeyCase};

#[test]
fn pool_keys_convert_both_ways() {
    let pairs = [
        ("poolState", "pool_state"),
        ("p2SingletonPuzzleHash", "p2_singleton_puzzle_hash"),
        ("currentDifficulty", "current_difficulty"),
        ("pointsFound24h", "points_found24h"),
        ("poolURL", "pool_u_r_l"),
    ];
    for (camel, snake) in pairs {
        assert_eq!(camel_to_snake(camel), snake);
        assert_eq!(snake_to_camel(snake), camel);
        assert_eq!(KeyCase::Snake.convert_key(camel), snake);
        assert_eq!(KeyCase::Camel.convert_key(snake), camel);
    }
}

#[test]
fn keys_outside_the_convention_pass_through() {
    for key in ["command", "_private", "ID", "already_snake", "with-dash", "9lives"] {
        assert_eq!(camel_to_snake(key), key);
    }
    for key in [
        "command",
        "_private",
        "a_1",
        "Upper_case",
        "double__gap",
        "poolState",
        "points_found_24h",
        "points_acknowledged_24h",
    ] {
        assert_eq!(snake_to_camel(key), key);
    }
    assert_eq!(
        to_camel_case(json!({"points_found_24h": 3, "points_acknowledged_24h": 2})),
        json!({"points_found_24h": 3, "points_acknowledged_24h": 2})
    );
}

#[test]
fn nested_structures_convert_keys_but_not_values() {
    let camel = json!({
        "poolState": [{
            "poolConfig": {"launcherId": "0x9f", "poolUrl": "keepThisValue"},
            "pointsFound24h": [[1, 2]],
        }],
        "walletId": 1,
        "note": "some_snake_value",
    });
    let snake = to_snake_case(camel.clone());
    assert_eq!(
        snake,
        json!({
            "pool_state": [{
                "pool_config": {"launcher_id": "0x9f", "pool_url": "keepThisValue"},
                "points_found24h": [[1, 2]],
            }],
            "wallet_id": 1,
            "note": "some_snake_value",
        })
    );
    assert_eq!(to_camel_case(snake), camel);
}

#[test]
fn scalars_and_arrays_of_scalars_are_untouched() {
    assert_eq!(to_snake_case(json!("poolState")), json!("poolState"));
    assert_eq!(to_camel_case(json!(["pool_state", 1, null])), json!(["pool_state", 1, null]));
}
