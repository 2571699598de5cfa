//! Classification throughput benchmarks.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use loottally::logging::MemorySink;
use loottally::model::{DestroyPolicy, ValueTable};
use loottally::parser::classify;
use loottally::source::analyze_lines;
use rust_decimal::Decimal;

const SAMPLE: [&str; 6] = [
    "[Mon Jan 01 10:10:00 2024] Your faction standing with Vox could not possibly get any better.",
    "[Mon Jan 01 10:10:05 2024] You receive 2 platinum, 5 gold and 7 silver from the corpse.",
    "[Mon Jan 01 10:10:09 2024] --You have looted a Spider Silk.--",
    "[Mon Jan 01 10:10:12 2024] --You have looted a Fine Steel Dagger.--",
    "[Mon Jan 01 10:10:15 2024] Soandso tells the group, 'inc'",
    "[Mon Jan 01 10:10:20 2024] You have slain a gnoll pup!",
];

/// A log of roughly 60k lines cycling through the sample.
fn generate_log() -> Vec<String> {
    SAMPLE
        .iter()
        .cycle()
        .take(60_000)
        .map(|line| line.to_string())
        .collect()
}

fn benchmark_classify(c: &mut Criterion) {
    let sink = MemorySink::new();

    c.bench_function("classify_coin_line", |b| {
        b.iter(|| classify(black_box(SAMPLE[1]), &sink))
    });

    c.bench_function("classify_unrecognized_line", |b| {
        b.iter(|| classify(black_box(SAMPLE[5]), &sink))
    });
}

fn benchmark_pipeline(c: &mut Criterion) {
    let log = generate_log();
    let values: ValueTable = [("Spider Silk".to_string(), Decimal::new(2, 0))]
        .into_iter()
        .collect();

    c.bench_function("analyze_60k_lines", |b| {
        b.iter(|| {
            let sink = MemorySink::new();
            let state = analyze_lines(
                black_box(log.iter().map(String::as_str)),
                &values,
                DestroyPolicy::default(),
                &sink,
            );
            black_box(state)
        })
    });
}

criterion_group!(benches, benchmark_classify, benchmark_pipeline);
criterion_main!(benches);
