//! Benchmark comparing the collected and channel zip strategies.

use continuable::prelude::*;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_zip_strategies(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("zip");

    for size in [1_000_u64, 100_000] {
        let collected = from_iter(0..size)
            .zip(from_iter(0..size), ZipStrategy::Collected)
            .unwrap_or_else(|error| panic!("{error}"));
        group.bench_with_input(BenchmarkId::new("collected", size), &size, |bencher, _| {
            bencher.iter(|| black_box(collected.count()));
        });

        for capacity in [1_usize, 64, 1_024] {
            let channel = from_iter(0..size)
                .zip(from_iter(0..size), ZipStrategy::Channel { capacity })
                .unwrap_or_else(|error| panic!("{error}"));
            group.bench_with_input(
                BenchmarkId::new(format!("channel_{capacity}"), size),
                &size,
                |bencher, _| {
                    bencher.iter(|| black_box(channel.count()));
                },
            );
        }
    }

    group.finish();
}

fn benchmark_into_channel(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("into_channel");

    for capacity in [1_usize, 64, 1_024] {
        group.bench_with_input(BenchmarkId::new("drain_10k", capacity), &capacity, |bencher, &capacity| {
            bencher.iter(|| {
                let iter = from_iter(0_u32..10_000)
                    .into_channel(capacity)
                    .unwrap_or_else(|error| panic!("{error}"));
                black_box(iter.count())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_zip_strategies, benchmark_into_channel);
criterion_main!(benches);
