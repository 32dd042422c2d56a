use crate::common::{configure_criterion, forward_through, wrap_through};
use criterion::{criterion_group, BenchmarkId, Criterion};
use std::hint::black_box;

pub fn bench_forward_depth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/forward_depth");

    for depth in [1, 4, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(forward_through(black_box(depth))))
        });
    }

    group.finish();
}

pub fn bench_wrap_depth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/wrap_depth");

    for depth in [1, 4, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(wrap_through(black_box(depth))))
        });
    }

    group.finish();
}

criterion_group! {
    name = scaling_benches;
    config = configure_criterion();
    targets =
        bench_forward_depth_scaling,
        bench_wrap_depth_scaling,
}
