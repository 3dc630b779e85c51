use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use mock_date::{convert_json, evaluate};
use serde_json::json;
use std::hint::black_box;

fn bench_evaluate(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2017, 7, 15).unwrap();

    c.bench_function("evaluate_offset", |b| {
        b.iter(|| evaluate(black_box("30 days from now"), today))
    });

    c.bench_function("evaluate_nested_custom", |b| {
        b.iter(|| {
            evaluate(
                black_box("end of year beginning of month 10 months from now (as custom '%d/%m/%Y')"),
                today,
            )
        })
    });

    let table = json!((0..100)
        .map(|i| json!({"id": i, "created_at": "yesterday", "due": "end of month next month"}))
        .collect::<Vec<_>>());
    c.bench_function("convert_fixture_table", |b| {
        b.iter(|| convert_json(black_box(&table), today))
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
