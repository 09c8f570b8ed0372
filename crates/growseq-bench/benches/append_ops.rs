//! Criterion micro-benchmarks for append and growth.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use growseq::GrowableSequence;
use growseq_bench::fill_profile;

/// Benchmark: append 10K u64 values starting from capacity 0 (15 growths).
fn bench_append_10k_from_zero(c: &mut Criterion) {
    c.bench_function("append_10k_from_zero", |b| {
        b.iter(|| black_box(fill_profile(0, 10_000)));
    });
}

/// Benchmark: append 10K u64 values into a presized buffer (no growth).
fn bench_append_10k_presized(c: &mut Criterion) {
    c.bench_function("append_10k_presized", |b| {
        b.iter(|| black_box(fill_profile(10_000, 10_000)));
    });
}

/// Benchmark: append heap-owning elements so growth moves non-Copy values.
fn bench_append_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_strings");
    for count in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut seq = GrowableSequence::with_capacity(0);
                for i in 0..count {
                    seq.append(i.to_string());
                }
                black_box(seq)
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_append_10k_from_zero,
    bench_append_10k_presized,
    bench_append_strings
);
criterion_main!(benches);
