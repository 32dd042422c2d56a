use crate::common::{configure_criterion, forward_through, wrap_through};
use criterion::{criterion_group, Criterion};
use dare_rail::{render, RenderConfig};
use std::hint::black_box;

/// Benchmarks for stacktrace rendering
pub fn bench_stacktrace_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting/stacktrace");

    let Err(long_trace) = forward_through(16) else { unreachable!() };
    let Err(long_chain) = wrap_through(16) else { unreachable!() };

    group.bench_function("long_trace", |b| {
        let mut out = String::with_capacity(1024);
        b.iter(|| {
            out.clear();
            let _ = render(&mut out, Some(black_box(&*long_trace)));
            black_box(out.len())
        })
    });

    group.bench_function("long_chain", |b| {
        let mut out = String::with_capacity(2048);
        b.iter(|| {
            out.clear();
            let _ = render(&mut out, Some(black_box(&*long_chain)));
            black_box(out.len())
        })
    });

    group.bench_function("compact", |b| {
        b.iter(|| black_box(long_chain.stacktrace().with_config(RenderConfig::compact()).to_string()))
    });

    group.finish();
}

criterion_group! {
    name = formatting_benches;
    config = configure_criterion();
    targets = bench_stacktrace_rendering,
}
