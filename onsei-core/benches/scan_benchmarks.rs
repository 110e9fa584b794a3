//! Benchmarks comparing the linear and pattern-based scanners

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use onsei_core::stats::{LinearScanner, PatternScanner, PhoneticScanner};
use onsei_core::{romanize, MonoidReduce, PhoneticCounts};
use std::hint::black_box;

/// Generate a code string from the given number of phrase units
fn generate_code(num_units: usize) -> String {
    let units = [
        "ワタシ", "ハ", "ガッコウ", "ヘ", "イキマス", "キョウ", "ハ", "ラーメン", "ヲ",
        "タベタ", "シュッパツ", "シマシタ",
    ];

    let reading = units
        .iter()
        .cycle()
        .take(num_units)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    romanize(&reading)
}

fn benchmark_scanners(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    let patterns = PatternScanner::new().expect("patterns compile");

    for size in [10, 100, 1000].iter() {
        let code = generate_code(*size);

        group.bench_with_input(BenchmarkId::new("linear", size), &code, |b, code| {
            b.iter(|| {
                let mut counts = PhoneticCounts::new();
                LinearScanner.scan(black_box(code), &mut counts);
                counts
            });
        });

        group.bench_with_input(BenchmarkId::new("regex", size), &code, |b, code| {
            b.iter(|| {
                let mut counts = PhoneticCounts::new();
                patterns.scan(black_box(code), &mut counts);
                counts
            });
        });
    }

    group.finish();
}

fn benchmark_romanize(c: &mut Criterion) {
    let mut group = c.benchmark_group("romanize");

    for size in [10, 100, 1000].iter() {
        let reading = ["シュッパツ", "キョウ", "ラーメン"].repeat(*size).join(" ");

        group.bench_with_input(BenchmarkId::from_parameter(size), &reading, |b, reading| {
            b.iter(|| romanize(black_box(reading)));
        });
    }

    group.finish();
}

fn benchmark_monoid_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("monoid_reduce");
    let code = generate_code(50);

    for num_documents in [2, 8, 32].iter() {
        let tables: Vec<PhoneticCounts> = (0..*num_documents)
            .map(|_| {
                let mut counts = PhoneticCounts::new();
                LinearScanner.scan(&code, &mut counts);
                counts
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(num_documents),
            &tables,
            |b, tables| {
                b.iter(|| PhoneticCounts::reduce(black_box(tables.clone())));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_scanners,
    benchmark_romanize,
    benchmark_monoid_reduce
);
criterion_main!(benches);
