use callsight_core::GenerationConfig;
use callsight_synth::generate_dataset;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_generate_200_calls(c: &mut Criterion) {
    let config = GenerationConfig::default();

    c.bench_function("generate_200_calls", |b| {
        b.iter(|| generate_dataset(black_box(&config)));
    });
}

fn bench_generate_1000_calls_with_interruptions(c: &mut Criterion) {
    let config = GenerationConfig {
        call_count: 1000,
        agent_count: 50,
        simulate_interruptions: true,
        ..GenerationConfig::default()
    };

    c.bench_function("generate_1000_calls_with_interruptions", |b| {
        b.iter(|| generate_dataset(black_box(&config)));
    });
}

criterion_group!(
    benches,
    bench_generate_200_calls,
    bench_generate_1000_calls_with_interruptions
);
criterion_main!(benches);
