//! Polynomial regression benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 50K examples)
//! - Polynomial degrees (linear to quintic)
//! - Feature counts (1 to 16)
//! - Convergence criteria (gradient magnitude, cost delta)
//! - Regularization strength
//! - Prediction throughput
//! - Pathological cases (divergent learning rate, constant targets)
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use polyreg_rs::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;

/// Iterations per fit, kept fixed so groups measure per-step cost.
const STEPS: usize = 200;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate `size` rows of `features` uniform values in [-1, 1] with a
/// quadratic target and Gaussian noise.
fn generate_quadratic_data(size: usize, features: usize, seed: u64) -> (Vec<Vec<f64>>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let x_dist = Uniform::new_inclusive(-1.0, 1.0).unwrap();
    let noise_dist = Normal::new(0.0, 0.1).unwrap();

    let x: Vec<Vec<f64>> = (0..size)
        .map(|_| (0..features).map(|_| x_dist.sample(&mut rng)).collect())
        .collect();
    let y: Vec<f64> = x
        .iter()
        .map(|row| {
            let signal: f64 = row
                .iter()
                .enumerate()
                .map(|(j, &v)| (j as f64 + 1.0) * v - 0.5 * v * v)
                .sum();
            1.0 + signal + noise_dist.sample(&mut rng)
        })
        .collect();
    (x, y)
}

/// Generate a noisy cubic in one feature.
fn generate_cubic_data(size: usize, seed: u64) -> (Vec<Vec<f64>>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.05).unwrap();

    let x: Vec<Vec<f64>> = (0..size)
        .map(|i| vec![i as f64 * 2.0 / size as f64 - 1.0])
        .collect();
    let y: Vec<f64> = x
        .iter()
        .map(|row| {
            let v = row[0];
            0.5 - v + 2.0 * v * v * v + noise_dist.sample(&mut rng)
        })
        .collect();
    (x, y)
}

fn regressor(degree: usize, max_steps: usize) -> PolynomialRegressor<f64> {
    PolyReg::new()
        .degree(degree)
        .learning_rate(0.05)
        .max_steps(max_steps)
        .tolerance(0.0)
        .seed(42)
        .build()
        .unwrap()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(20);

    for size in [1_000, 5_000, 10_000, 50_000] {
        group.throughput(Throughput::Elements((size * STEPS) as u64));

        let (x, y) = generate_quadratic_data(size, 2, 42);

        group.bench_with_input(BenchmarkId::new("fit", size), &size, |b, _| {
            b.iter(|| {
                regressor(2, STEPS)
                    .fit(black_box(&x), black_box(&y))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_polynomial_degrees(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_degrees");
    group.sample_size(50);

    let (x, y) = generate_cubic_data(5_000, 42);

    for degree in [1, 2, 3, 4, 5] {
        group.bench_with_input(BenchmarkId::new("fit", degree), &degree, |b, &degree| {
            b.iter(|| {
                regressor(degree, STEPS)
                    .fit(black_box(&x), black_box(&y))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_features(c: &mut Criterion) {
    let mut group = c.benchmark_group("features");
    group.sample_size(30);

    for features in [1, 2, 4, 8, 16] {
        let (x, y) = generate_quadratic_data(5_000, features, 42);

        group.bench_with_input(
            BenchmarkId::new("fit", features),
            &features,
            |b, _| {
                b.iter(|| {
                    regressor(2, STEPS)
                        .fit(black_box(&x), black_box(&y))
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_convergence(c: &mut Criterion) {
    let mut group = c.benchmark_group("convergence");
    group.sample_size(20);

    let (x, y) = generate_quadratic_data(2_000, 2, 42);

    let criteria = [
        ("gradient_magnitude", GradientMagnitude, 1e-3),
        ("cost_delta", CostDelta, 1e-9),
    ];

    for (name, rule, tolerance) in criteria {
        group.bench_function(name, |b| {
            b.iter(|| {
                PolyReg::new()
                    .degree(2)
                    .learning_rate(0.1)
                    .max_steps(50_000)
                    .tolerance(tolerance)
                    .convergence(rule)
                    .seed(42)
                    .build()
                    .unwrap()
                    .fit(black_box(&x), black_box(&y))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_regularization(c: &mut Criterion) {
    let mut group = c.benchmark_group("regularization");
    group.sample_size(50);

    let (x, y) = generate_quadratic_data(5_000, 4, 42);

    for lambda in [0.0, 1.0, 100.0, 10_000.0] {
        group.bench_with_input(BenchmarkId::new("fit", lambda), &lambda, |b, &lambda| {
            b.iter(|| {
                PolyReg::new()
                    .degree(2)
                    .learning_rate(0.05)
                    .max_steps(STEPS)
                    .lambda(lambda)
                    .tolerance(0.0)
                    .seed(42)
                    .build()
                    .unwrap()
                    .fit(black_box(&x), black_box(&y))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("predict");
    group.sample_size(100);

    for degree in [1, 3, 5] {
        let (x, y) = generate_quadratic_data(10_000, 8, 42);
        let mut model = regressor(degree, 50);
        model.fit(&x, &y).unwrap();

        group.throughput(Throughput::Elements(x.len() as u64));
        group.bench_with_input(BenchmarkId::new("batch", degree), &degree, |b, _| {
            b.iter(|| model.predict_many(black_box(&x)).unwrap())
        });
    }
    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(50);

    // Divergent learning rate: every step trips the stability guard
    let (x, y) = generate_cubic_data(1_000, 42);
    let x_scaled: Vec<Vec<f64>> = x.iter().map(|row| vec![row[0] * 1e3]).collect();
    group.bench_function("divergent", |b| {
        b.iter(|| {
            PolyReg::new()
                .degree(3)
                .learning_rate(1.0)
                .max_steps(STEPS)
                .tolerance(0.0)
                .seed(42)
                .build()
                .unwrap()
                .fit(black_box(&x_scaled), black_box(&y))
                .unwrap()
        })
    });

    // Constant targets
    let (x_const, _) = generate_quadratic_data(5_000, 2, 42);
    let y_const = vec![3.0; x_const.len()];
    group.bench_function("constant_targets", |b| {
        b.iter(|| {
            regressor(2, STEPS)
                .fit(black_box(&x_const), black_box(&y_const))
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_polynomial_degrees,
    bench_features,
    bench_convergence,
    bench_regularization,
    bench_predict,
    bench_pathological,
);
criterion_main!(benches);
