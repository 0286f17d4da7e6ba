// ============================================================================
// Shadow Real Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Accumulation - Running sum, one add per element
// 2. Polynomial - Horner evaluation, mul + add per coefficient
// 3. Transcendental - sin/exp/sqrt chain per element
//
// Each category compares the native float, Real in Plain mode and Real in
// Tracked mode. Plain is expected to match native; Tracked pays for the
// second lane and the wider payload.
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use shadow_real::prelude::*;
use std::hint::black_box;

type SP = Real<Single, Plain>;
type ST = Real<Single, Tracked>;

const COEFFICIENTS: [f32; 6] = [0.5, -1.25, 3.0, 0.125, -2.0, 1.0];

fn inputs(len: usize) -> Vec<f32> {
    (0..len).map(|i| (i as f32 * 0.37).sin() * 4.0).collect()
}

// ============================================================================
// Accumulation
// ============================================================================

fn benchmark_accumulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulation");

    for len in [100, 1000, 10000].iter() {
        let data = inputs(*len);
        let plain: Vec<SP> = data.iter().map(|&x| SP::new(x)).collect();
        let tracked: Vec<ST> = data.iter().map(|&x| ST::new(x)).collect();

        group.bench_with_input(BenchmarkId::new("f32", len), &data, |b, data| {
            b.iter(|| black_box(data.iter().sum::<f32>()));
        });

        group.bench_with_input(BenchmarkId::new("Plain", len), &plain, |b, plain| {
            b.iter(|| black_box(plain.iter().sum::<SP>()));
        });

        group.bench_with_input(BenchmarkId::new("Tracked", len), &tracked, |b, tracked| {
            b.iter(|| black_box(tracked.iter().sum::<ST>()));
        });
    }

    group.finish();
}

// ============================================================================
// Polynomial
// ============================================================================

fn horner<M: Mode>(x: Real<Single, M>) -> Real<Single, M> {
    COEFFICIENTS
        .iter()
        .fold(Real::default(), |acc, &k| acc * x + k)
}

fn benchmark_polynomial(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial");
    let data = inputs(1000);

    group.bench_function("f32", |b| {
        b.iter(|| {
            for &x in &data {
                black_box(COEFFICIENTS.iter().fold(0.0_f32, |acc, &k| acc * x + k));
            }
        });
    });

    group.bench_function("Plain", |b| {
        b.iter(|| {
            for &x in &data {
                black_box(horner(SP::new(x)));
            }
        });
    });

    group.bench_function("Tracked", |b| {
        b.iter(|| {
            for &x in &data {
                black_box(horner(ST::new(x)));
            }
        });
    });

    group.finish();
}

// ============================================================================
// Transcendental
// ============================================================================

fn benchmark_transcendental(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcendental");
    let data = inputs(1000);

    group.bench_function("f32", |b| {
        b.iter(|| {
            for &x in &data {
                black_box((x.sin().exp() + 1.0).sqrt());
            }
        });
    });

    group.bench_function("Plain", |b| {
        b.iter(|| {
            for &x in &data {
                black_box((SP::new(x).sin().exp() + 1.0_f32).sqrt());
            }
        });
    });

    group.bench_function("Tracked", |b| {
        b.iter(|| {
            for &x in &data {
                black_box((ST::new(x).sin().exp() + 1.0_f32).sqrt());
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_accumulation,
    benchmark_polynomial,
    benchmark_transcendental,
);
criterion_main!(benches);
