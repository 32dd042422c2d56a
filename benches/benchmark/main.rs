use criterion::criterion_main;

mod formatting;
mod scaling;

criterion_main!(
    core::core_benches,
    scaling::scaling_benches,
    formatting::formatting_benches,
);
