//! Criterion micro-benchmarks for checked reads and in-place writes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use growseq_bench::fill_profile;

/// Benchmark: sum 10K values through checked `get`.
fn bench_get_10k(c: &mut Criterion) {
    let seq = fill_profile(0, 10_000);
    c.bench_function("get_10k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..seq.len() {
                if let Ok(v) = seq.get(i) {
                    sum = sum.wrapping_add(*v);
                }
            }
            black_box(sum)
        });
    });
}

/// Benchmark: overwrite 10K slots through `set`.
fn bench_set_10k(c: &mut Criterion) {
    let mut seq = fill_profile(0, 10_000);
    c.bench_function("set_10k", |b| {
        b.iter(|| {
            for i in 0..seq.len() {
                let _ = black_box(seq.set(i, i as u64 * 2));
            }
        });
    });
}

/// Benchmark: slice iteration over 10K values for comparison with `get`.
fn bench_iter_10k(c: &mut Criterion) {
    let seq = fill_profile(0, 10_000);
    c.bench_function("iter_10k", |b| {
        b.iter(|| black_box(seq.iter().fold(0u64, |acc, v| acc.wrapping_add(*v))));
    });
}

criterion_group!(benches, bench_get_10k, bench_set_10k, bench_iter_10k);
criterion_main!(benches);
