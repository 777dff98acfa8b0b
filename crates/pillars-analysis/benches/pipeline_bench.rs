//! Pipeline benchmarks.
//!
//! Benchmarks: single-chart stages and the parallel batch API.
//! Run with: cargo bench -p pillars-analysis --bench pipeline_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pillars_analysis::{
    analyze_batch, analyze_chart, classify_pattern, compute_force_matrix, AnalysisOptions,
};
use pillars_core::{Branch, Chart, Pillar, Stem};

/// Deterministic spread of charts across the 60 stem/branch pairings.
fn sample_charts(count: usize) -> Vec<Chart> {
    let pillar = |i: usize| Pillar::new(Stem::from_index(i % 10), Branch::from_index(i % 12));
    (0..count)
        .map(|i| {
            let hour = (i % 7 != 0).then(|| pillar(i * 11 + 3));
            Chart::new(pillar(i * 7), pillar(i * 3 + 1), pillar(i * 5 + 2), hour)
        })
        .collect()
}

fn single_chart(c: &mut Criterion) {
    let chart = Chart::parse("戊戌", "庚申", "乙丑", "辛酉").unwrap();
    let options = AnalysisOptions::default();

    c.bench_function("force_matrix", |b| {
        b.iter(|| compute_force_matrix(black_box(&chart), None))
    });
    c.bench_function("pattern", |b| {
        b.iter(|| classify_pattern(black_box(&chart), false))
    });
    c.bench_function("analyze_chart", |b| {
        b.iter(|| analyze_chart(black_box(&chart), &options))
    });
}

fn batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_batch");
    group.sample_size(20);
    let options = AnalysisOptions::default();

    for size in [100, 1000, 10000] {
        let charts = sample_charts(size);
        group.bench_with_input(BenchmarkId::new("charts", size), &charts, |b, charts| {
            b.iter(|| analyze_batch(charts, &options));
        });
    }
    group.finish();
}

criterion_group!(benches, single_chart, batch);
criterion_main!(benches);
