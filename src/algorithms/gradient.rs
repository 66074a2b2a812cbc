//! Cost and gradient computation for ridge-regularized polynomial regression.
//!
//! ## Purpose
//!
//! This module computes the mean squared error of a model on a labeled
//! dataset together with the derivatives of the cost with respect to the
//! bias and every coefficient.
//!
//! ## Design notes
//!
//! * **Single pass**: Each example is predicted once; its error is then
//!   spread over all coefficient gradients using incrementally built powers.
//! * **Buffer reuse**: `Gradients` can be reset and refilled, so the training
//!   loop allocates the gradient matrix once.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Cost**: `(1/m) Σ_i e_i^2` with `e_i = predict(x_i) - y_i`.
//! * **Bias gradient**: `(1/m) Σ_i e_i`.
//! * **Coefficient gradient**:
//!   `(1/m) (Σ_i e_i x_ij^(k+1) + lambda * c_kj)`.
//!
//! ## Invariants
//!
//! * The bias is never regularized.
//! * The L2 penalty affects gradients only, never the reported cost.
//! * Gradient shape always equals coefficient shape.
//!
//! ## Non-goals
//!
//! * This module does not validate input shapes (see `engine::validator`).
//! * This module does not update parameters.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::polynomial::PolynomialModel;
use crate::math::norms::l1_norm;
use crate::math::powers::powers;
use crate::math::scalar::from_usize;

// ============================================================================
// Gradients
// ============================================================================

/// Cost and parameter derivatives for one evaluation of the training set.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients<T> {
    /// Mean squared error of the model before any update.
    pub cost: T,

    /// Derivative with respect to the bias.
    pub d_bias: T,

    /// Derivatives with respect to each coefficient, shaped like the coefficients.
    pub d_coefficients: Vec<Vec<T>>,
}

impl<T: Float> Gradients<T> {
    /// Zero gradients for a `degree × feature_count` model.
    pub fn zeros(degree: usize, feature_count: usize) -> Self {
        Self {
            cost: T::zero(),
            d_bias: T::zero(),
            d_coefficients: (0..degree)
                .map(|_| (0..feature_count).map(|_| T::zero()).collect())
                .collect(),
        }
    }

    /// Zero every entry, reshaping to `degree × feature_count` if needed.
    pub fn reset(&mut self, degree: usize, feature_count: usize) {
        self.cost = T::zero();
        self.d_bias = T::zero();
        self.d_coefficients.resize_with(degree, Vec::new);
        for row in self.d_coefficients.iter_mut() {
            row.clear();
            row.resize(feature_count, T::zero());
        }
    }

    /// Summed absolute gradient, `|d_bias| + Σ |d_coefficients|`.
    ///
    /// This is the convergence signal of the training loop.
    pub fn magnitude(&self) -> T {
        self.d_bias.abs() + l1_norm(self.d_coefficients.iter().flatten().copied())
    }
}

// ============================================================================
// Computation
// ============================================================================

/// Compute cost and gradients of `model` on a dataset into `out`.
///
/// Inputs must already be validated: at least one row, one target per row,
/// and every row of length `model.feature_count()`.
pub fn accumulate_gradients<T: Float, R: AsRef<[T]>>(
    model: &PolynomialModel<T>,
    features: &[R],
    targets: &[T],
    lambda: T,
    out: &mut Gradients<T>,
) {
    let degree = model.degree();
    let feature_count = model.feature_count();
    out.reset(degree, feature_count);

    let mut sum_sq = T::zero();
    for (x, &y) in features.iter().zip(targets.iter()) {
        let x = x.as_ref();
        let error = model.evaluate(x) - y;
        sum_sq = sum_sq + error * error;
        out.d_bias = out.d_bias + error;

        for (j, &xj) in x.iter().enumerate().take(feature_count) {
            for (k, p) in powers(xj).take(degree).enumerate() {
                out.d_coefficients[k][j] = out.d_coefficients[k][j] + error * p;
            }
        }
    }

    let m = from_usize::<T>(features.len());
    out.cost = sum_sq / m;
    out.d_bias = out.d_bias / m;

    for (d_row, c_row) in out
        .d_coefficients
        .iter_mut()
        .zip(model.coefficients().iter())
    {
        for (d, &c) in d_row.iter_mut().zip(c_row.iter()) {
            *d = (*d + lambda * c) / m;
        }
    }
}

/// Mean squared error of `model` on a validated dataset.
pub fn mean_squared_error<T: Float, R: AsRef<[T]>>(
    model: &PolynomialModel<T>,
    features: &[R],
    targets: &[T],
) -> T {
    let sum_sq = features
        .iter()
        .zip(targets.iter())
        .fold(T::zero(), |acc, (x, &y)| {
            let e = model.evaluate(x.as_ref()) - y;
            acc + e * e
        });
    sum_sq / from_usize(features.len())
}
