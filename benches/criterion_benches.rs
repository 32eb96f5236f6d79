//! Criterion benchmarks for vega-math
//!
//! Measures wall-clock time for each approximation tier against the
//! libm reference it replaces.
//! Run with: cargo bench --bench criterion_benches

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use vega_math::trig::{inverse, lookup, smooth, smoother};
use vega_math::{ease, exp};

/// Angles spread over several revolutions so the benchmark exercises
/// the wrap path, not just the first quadrant.
fn angles() -> Vec<f32> {
    (0..1024).map(|i| i as f32 * 0.037 - 19.0).collect()
}

/// Benchmark the three sin tiers against libm
fn bench_sin_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("sin");
    let xs = angles();

    group.bench_function("lookup", |bencher| {
        bencher.iter(|| {
            let mut acc = 0.0f32;
            for &x in &xs {
                acc += lookup::sin(black_box(x));
            }
            black_box(acc)
        })
    });

    group.bench_function("smooth", |bencher| {
        bencher.iter(|| {
            let mut acc = 0.0f32;
            for &x in &xs {
                acc += smooth::sin(black_box(x));
            }
            black_box(acc)
        })
    });

    group.bench_function("smoother", |bencher| {
        bencher.iter(|| {
            let mut acc = 0.0f32;
            for &x in &xs {
                acc += smoother::sin(black_box(x));
            }
            black_box(acc)
        })
    });

    group.bench_function("libm", |bencher| {
        bencher.iter(|| {
            let mut acc = 0.0f32;
            for &x in &xs {
                acc += libm::sinf(black_box(x));
            }
            black_box(acc)
        })
    });

    group.finish();
}

/// Benchmark atan2 against libm
fn bench_atan2(c: &mut Criterion) {
    let mut group = c.benchmark_group("atan2");
    let xs = angles();

    group.bench_function("vega", |bencher| {
        bencher.iter(|| {
            let mut acc = 0.0f32;
            for &x in &xs {
                acc += inverse::atan2(black_box(x), black_box(1.5f32));
            }
            black_box(acc)
        })
    });

    group.bench_function("libm", |bencher| {
        bencher.iter(|| {
            let mut acc = 0.0f32;
            for &x in &xs {
                acc += libm::atan2f(black_box(x), black_box(1.5f32));
            }
            black_box(acc)
        })
    });

    group.finish();
}

/// Benchmark exp/log kernels against libm
fn bench_exp_log(c: &mut Criterion) {
    let mut group = c.benchmark_group("exp_log");

    group.bench_function("fast_expf", |bencher| {
        bencher.iter(|| black_box(exp::fast_expf(black_box(2.5))))
    });
    group.bench_function("libm_expf", |bencher| {
        bencher.iter(|| black_box(libm::expf(black_box(2.5))))
    });
    group.bench_function("fast_logf", |bencher| {
        bencher.iter(|| black_box(exp::fast_logf(black_box(42.0))))
    });
    group.bench_function("libm_logf", |bencher| {
        bencher.iter(|| black_box(libm::logf(black_box(42.0))))
    });

    group.finish();
}

/// Benchmark a representative easing curve
fn bench_ease(c: &mut Criterion) {
    c.bench_function("ease_smoother", |bencher| {
        bencher.iter(|| black_box(ease::smoother(black_box(0.37))))
    });
    c.bench_function("ease_elastic_out", |bencher| {
        bencher.iter(|| black_box(ease::elastic_out(black_box(0.37))))
    });
}

criterion_group!(benches, bench_sin_tiers, bench_atan2, bench_exp_log, bench_ease);
criterion_main!(benches);
