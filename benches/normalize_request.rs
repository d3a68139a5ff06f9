//! Benchmarks for request tree normalization
//!
//! This benchmark measures:
//! - Parsed tree to canonical document reshaping
//! - Defaulting overhead on sparse trees

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use bru_json::normalize_request;

const SAMPLE_REQUEST_TREE: &str = r#"{
  "meta": {
    "type": "http",
    "name": "Create user",
    "seq": "3"
  },
  "http": {
    "method": "post",
    "url": "https://{{host}}/users",
    "body": "json"
  },
  "query": [
    { "name": "dryRun", "value": "true", "enabled": true }
  ],
  "headers": [
    { "name": "Content-Type", "value": "application/json", "enabled": true },
    { "name": "Authorization", "value": "Bearer {{token}}", "enabled": true }
  ],
  "body": {
    "json": "{\"name\": \"ada\", \"role\": \"admin\"}"
  },
  "vars": [
    { "name": "userId", "value": "res.body.id", "enabled": true }
  ],
  "assert": [
    { "name": "res.status", "value": "201", "enabled": true }
  ],
  "script": "const token = 'x';",
  "tests": "test('created', () => {});"
}"#;

fn bench_normalize_request(c: &mut Criterion) {
    let full_tree: serde_json::Value = serde_json::from_str(SAMPLE_REQUEST_TREE).unwrap();
    let sparse_tree = serde_json::json!({});

    let mut group = c.benchmark_group("normalize_request");
    group.throughput(Throughput::Elements(1));

    group.bench_function("full_tree", |b| {
        b.iter(|| normalize_request(black_box(&full_tree)).unwrap())
    });

    group.bench_function("sparse_tree", |b| {
        b.iter(|| normalize_request(black_box(&sparse_tree)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_normalize_request);
criterion_main!(benches);
