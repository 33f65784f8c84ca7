use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_flatkeys::{flatten, flatten_with_options, to_flat_map, BuiltinTransform, FlattenOptions, Value};

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Clone)]
struct NestedData {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

#[derive(Serialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

fn users(size: u32) -> Vec<User> {
    (0..size)
        .map(|i| User {
            id: i,
            name: format!("User {}", i),
            email: format!("user{}@example.com", i),
            active: i % 2 == 0,
        })
        .collect()
}

fn benchmark_flatten_struct(c: &mut Criterion) {
    let data = NestedData {
        id: 1,
        metadata: Metadata {
            created: "2024-01-01".to_string(),
            updated: "2024-01-02".to_string(),
            version: 3,
        },
        tags: vec!["a".to_string(), "b".to_string(), "c".to_string()],
    };
    let options = FlattenOptions::new();

    c.bench_function("to_flat_map_nested_struct", |b| {
        b.iter(|| to_flat_map(black_box(&data), &options))
    });
}

fn benchmark_flatten_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten_array");

    for size in [10, 100, 1000].iter() {
        let doc: Value = serde_flatkeys::to_value(&users(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| flatten(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_key_transform(c: &mut Criterion) {
    let doc: Value = serde_flatkeys::to_value(&users(100)).unwrap();
    let builtin = FlattenOptions::new().with_builtin_transform(BuiltinTransform::Uppercase);
    let custom = FlattenOptions::new().with_key_transform(|_, key| key.to_uppercase());

    let mut group = c.benchmark_group("key_transform");
    group.bench_function("builtin", |b| {
        b.iter(|| flatten_with_options(black_box(&doc), &builtin))
    });
    group.bench_function("custom", |b| {
        b.iter(|| flatten_with_options(black_box(&doc), &custom))
    });
    group.finish();
}

fn benchmark_deep_nesting(c: &mut Criterion) {
    let mut doc = Value::from(1);
    for _ in 0..1000 {
        doc = Value::Array(vec![doc]);
    }

    c.bench_function("flatten_deep_1000", |b| b.iter(|| flatten(black_box(&doc))));
}

criterion_group!(
    benches,
    benchmark_flatten_struct,
    benchmark_flatten_array,
    benchmark_key_transform,
    benchmark_deep_nesting
);
criterion_main!(benches);
