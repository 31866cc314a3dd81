// Criterion benchmarks for CloudMatch

use cloudmatch::{AbsentPolicy, DecodeMode, MatchInput};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Map, Value};

fn restaurant_map() -> Map<String, Value> {
    match json!({
        "criteria": "restaurant",
        "latitude": 37.5,
        "longitude": -122.3,
        "equalityParam": "open",
        "areaStart": "2014-01-01",
        "areaEnd": "2014-01-31",
        "unrecognized": [1, 2, 3],
    }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

fn bench_from_map(c: &mut Criterion) {
    let map = restaurant_map();
    c.bench_function("from_map", |b| {
        b.iter(|| MatchInput::from_map(black_box(&map)));
    });
}

fn bench_strict_decode(c: &mut Criterion) {
    let map = restaurant_map();
    c.bench_function("decode_strict", |b| {
        b.iter(|| MatchInput::decode(black_box(&map), DecodeMode::Strict));
    });
}

fn bench_to_map(c: &mut Criterion) {
    let input = MatchInput::from_map(&restaurant_map());
    let sparse = MatchInput::default().with_criteria("cafe");

    c.bench_function("to_map_full", |b| {
        b.iter(|| black_box(&input).to_map());
    });

    c.bench_function("to_map_sparse_zero_value", |b| {
        b.iter(|| black_box(&sparse).to_map_with(AbsentPolicy::ZeroValue));
    });
}

fn bench_json_text(c: &mut Criterion) {
    let input = MatchInput::from_map(&restaurant_map());
    let text = serde_json::to_string(&input).unwrap();

    c.bench_function("serialize_to_string", |b| {
        b.iter(|| serde_json::to_string(black_box(&input)).unwrap());
    });

    c.bench_function("deserialize_from_str", |b| {
        b.iter(|| serde_json::from_str::<MatchInput>(black_box(&text)).unwrap());
    });
}

criterion_group!(benches, bench_from_map, bench_strict_decode, bench_to_map, bench_json_text);
criterion_main!(benches);
