#![cfg(feature = "dev")]
//! Tests for cost and gradient computation.
//!
//! These tests verify:
//! - Cost is the mean squared error of the current model
//! - Gradients agree with finite differences of the cost
//! - The L2 penalty shifts coefficient gradients only
//!
//! ## Test Organization
//!
//! 1. **Cost** - Mean squared error values
//! 2. **Gradients** - Analytic values and finite-difference agreement
//! 3. **Regularization** - Effect of lambda
//! 4. **Buffers** - Reset and magnitude

use approx::assert_relative_eq;

use polyreg_rs::internals::algorithms::gradient::{
    accumulate_gradients, mean_squared_error, Gradients,
};
use polyreg_rs::internals::algorithms::polynomial::PolynomialModel;

// ============================================================================
// Helper Functions
// ============================================================================

fn dataset() -> (Vec<Vec<f64>>, Vec<f64>) {
    let features = vec![
        vec![1.0, 4.0],
        vec![2.0, 6.0],
        vec![3.0, 8.0],
        vec![4.0, 2.0],
        vec![5.0, 9.0],
    ];
    let targets = vec![35.0, 78.0, 137.0, 20.0, 177.0];
    (features, targets)
}

fn model() -> PolynomialModel<f64> {
    PolynomialModel::from_parts(0.7, vec![vec![0.2, -0.4], vec![0.1, 0.3]]).unwrap()
}

fn gradients(model: &PolynomialModel<f64>, lambda: f64) -> Gradients<f64> {
    let (features, targets) = dataset();
    let mut out = Gradients::zeros(model.degree(), model.feature_count());
    accumulate_gradients(model, &features, &targets, lambda, &mut out);
    out
}

fn perturbed(model: &PolynomialModel<f64>, k: usize, j: usize, h: f64) -> PolynomialModel<f64> {
    let mut coefficients = model.coefficients().to_vec();
    coefficients[k][j] += h;
    PolynomialModel::from_parts(model.bias(), coefficients).unwrap()
}

// ============================================================================
// Cost
// ============================================================================

/// A perfect model has zero cost and zero gradients.
#[test]
fn test_exact_model_has_zero_cost() {
    let exact = PolynomialModel::from_parts(0.0, vec![vec![3.0, 0.0], vec![0.0, 2.0]]).unwrap();
    let g = gradients(&exact, 0.0);
    assert_eq!(g.cost, 0.0);
    assert_eq!(g.magnitude(), 0.0);
}

/// Cost is the mean of squared residuals.
#[test]
fn test_cost_is_mean_squared_error() {
    let features = vec![vec![0.0], vec![1.0], vec![2.0]];
    let targets = vec![1.0, 1.0, 1.0];
    // y_hat = 0 + 1*x  => residuals -1, 0, 1
    let m = PolynomialModel::from_parts(0.0, vec![vec![1.0]]).unwrap();
    assert_relative_eq!(mean_squared_error(&m, &features, &targets), 2.0 / 3.0);

    let mut g = Gradients::zeros(1, 1);
    accumulate_gradients(&m, &features, &targets, 0.0, &mut g);
    assert_relative_eq!(g.cost, 2.0 / 3.0);
    assert_relative_eq!(g.d_bias, 0.0);
    // (-1*0 + 0*1 + 1*2) / 3
    assert_relative_eq!(g.d_coefficients[0][0], 2.0 / 3.0);
}

// ============================================================================
// Gradients
// ============================================================================

/// Gradients are half the derivative of the mean squared error.
#[test]
fn test_gradients_match_finite_differences() {
    let (features, targets) = dataset();
    let base = model();
    let g = gradients(&base, 0.0);
    let h = 1e-6;

    for k in 0..base.degree() {
        for j in 0..base.feature_count() {
            let plus = mean_squared_error(&perturbed(&base, k, j, h), &features, &targets);
            let minus = mean_squared_error(&perturbed(&base, k, j, -h), &features, &targets);
            let numeric = (plus - minus) / (2.0 * h);
            assert_relative_eq!(g.d_coefficients[k][j], 0.5 * numeric, max_relative = 1e-5);
        }
    }

    let shift = |b: f64| {
        PolynomialModel::from_parts(base.bias() + b, base.coefficients().to_vec()).unwrap()
    };
    let numeric = (mean_squared_error(&shift(h), &features, &targets)
        - mean_squared_error(&shift(-h), &features, &targets))
        / (2.0 * h);
    assert_relative_eq!(g.d_bias, 0.5 * numeric, max_relative = 1e-5);
}

/// Gradient shape follows the coefficient shape.
#[test]
fn test_gradient_shape() {
    let g = gradients(&model(), 0.0);
    assert_eq!(g.d_coefficients.len(), 2);
    assert!(g.d_coefficients.iter().all(|row| row.len() == 2));
}

// ============================================================================
// Regularization
// ============================================================================

/// Lambda adds `lambda * c / m` to each coefficient gradient.
#[test]
fn test_lambda_shifts_coefficient_gradients() {
    let base = model();
    let lambda = 3.0;
    let plain = gradients(&base, 0.0);
    let ridge = gradients(&base, lambda);
    let m = dataset().0.len() as f64;

    for (k, row) in base.coefficients().iter().enumerate() {
        for (j, &c) in row.iter().enumerate() {
            assert_relative_eq!(
                ridge.d_coefficients[k][j] - plain.d_coefficients[k][j],
                lambda * c / m,
                epsilon = 1e-9
            );
        }
    }
}

/// The bias gradient and reported cost ignore lambda.
#[test]
fn test_lambda_does_not_touch_bias_or_cost() {
    let base = model();
    let plain = gradients(&base, 0.0);
    let ridge = gradients(&base, 50.0);
    assert_eq!(plain.d_bias, ridge.d_bias);
    assert_eq!(plain.cost, ridge.cost);
}

// ============================================================================
// Buffers
// ============================================================================

/// Reset zeroes and reshapes a reused buffer.
#[test]
fn test_reset_reshapes() {
    let mut g = gradients(&model(), 1.0);
    g.reset(3, 1);
    assert_eq!(g.cost, 0.0);
    assert_eq!(g.d_bias, 0.0);
    assert_eq!(g.d_coefficients, vec![vec![0.0]; 3]);
}

/// Magnitude sums absolute values of every derivative.
#[test]
fn test_magnitude() {
    let g = Gradients {
        cost: 9.0,
        d_bias: -1.5,
        d_coefficients: vec![vec![2.0, -0.5], vec![0.0, 1.0]],
    };
    assert_eq!(g.magnitude(), 5.0);
}
