//! Benchmark for producer pipelines against the equivalent iterator chains.
//!
//! Measures the per-element cost of the push-style combinators.

use continuable::prelude::*;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// =============================================================================
// Pipelines
// =============================================================================

fn benchmark_map_filter_sum(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter_sum");

    for size in [100_u64, 10_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("continuable", size), &size, |bencher, &size| {
            let pipeline = from_iter(0..size).map(|x| x * 3).filter(|x| x % 2 == 0);
            bencher.iter(|| black_box(pipeline.sum::<u64>()));
        });

        group.bench_with_input(BenchmarkId::new("iterator", size), &size, |bencher, &size| {
            bencher.iter(|| {
                black_box((0..size).map(|x| x * 3).filter(|x| x % 2 == 0).sum::<u64>())
            });
        });
    }

    group.finish();
}

fn benchmark_early_termination(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("early_termination");

    for limit in [10_usize, 1_000] {
        group.bench_with_input(BenchmarkId::new("take", limit), &limit, |bencher, &limit| {
            let pipeline = from_iter(0_u64..).map(|x| x + 1).take(limit);
            bencher.iter(|| black_box(pipeline.count()));
        });

        group.bench_with_input(BenchmarkId::new("find", limit), &limit, |bencher, &limit| {
            let target = limit as u64;
            let producer = from_iter(0_u64..);
            bencher.iter(|| black_box(producer.find(|x| *x == target)));
        });
    }

    group.finish();
}

// =============================================================================
// Structure
// =============================================================================

fn benchmark_structure(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("structure");

    group.bench_function("product_all_4x10", |bencher| {
        let cube = product_all((0..4).map(|_| from_iter(0_u8..10)));
        bencher.iter(|| black_box(cube.count()));
    });

    group.bench_function("group_by_reduce_10k", |bencher| {
        let producer = from_iter(0_u32..10_000);
        bencher.iter(|| black_box(producer.group_by_reduce(|x| x % 97, |a, b| a + b).len()));
    });

    group.bench_function("partition_step_10k", |bencher| {
        let windows = from_iter(0_u32..10_000).partition_step(8, 3).unwrap_or_else(|error| panic!("{error}"));
        bencher.iter(|| black_box(windows.count()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map_filter_sum,
    benchmark_early_termination,
    benchmark_structure
);
criterion_main!(benches);
