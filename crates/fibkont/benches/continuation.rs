use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use eyre::Result;
use fibkont::{Continuation, Evaluator, IterativeEvaluator};
use std::hint::black_box;

fn build_chain(frames: usize) -> Result<Continuation> {
    let k = (0..frames).try_fold(Continuation::empty(), |k, _| k.push(3))?;
    Ok(k)
}

fn resolve_chain(k: Continuation) -> Result<u64> {
    let value = IterativeEvaluator::default().evaluate::<u64>(1, k)?.value;
    Ok(value)
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("continuation_build_100k", |b| b.iter(|| build_chain(black_box(100_000))));
    c.bench_function("continuation_drop_100k", |b| {
        b.iter_batched(|| build_chain(100_000).expect("build_chain"), drop, BatchSize::LargeInput)
    });
    c.bench_function("continuation_resolve_100k", |b| {
        b.iter_batched(|| build_chain(100_000).expect("build_chain"), resolve_chain, BatchSize::LargeInput)
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
