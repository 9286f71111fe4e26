use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use cryptomines_api::codec::safe_number::big_integer;
use cryptomines_api::domains::message::{Message, MessageOptions};
use cryptomines_api::ServiceName;
use serde_json::json;

fn pool_state_message() -> Message {
    let mut data = json!({
        "poolState": [{
            "p2SingletonPuzzleHash": "0x4a2b",
            "currentDifficulty": 1,
            "pointsFound24h": [[1_700_000_000, 3]],
            "poolConfig": {"launcherId": "0x9f", "poolUrl": "https://pool.example"}
        }]
    });
    data["walletBalance"] = big_integer("18446744073709551616000").unwrap();
    Message::new(
        MessageOptions::new("get_pool_state", ServiceName::Events, ServiceName::Farmer).data(data),
    )
}

fn bench_message_codec(c: &mut Criterion) {
    let message = pool_state_message();
    let frame = message.to_json(true).unwrap();

    let mut group = c.benchmark_group("message");
    group.bench_function("to_json_snake_case", |b| {
        b.iter(|| black_box(&message).to_json(true).unwrap())
    });
    group.bench_function("from_json_camel_case", |b| {
        b.iter(|| Message::from_json(black_box(&frame), true).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_message_codec);
criterion_main!(benches);
