//! Polynomial model representation and prediction.
//!
//! ## Purpose
//!
//! This module defines `PolynomialModel`, the parameter set fitted by
//! gradient descent, and evaluates it on feature vectors.
//!
//! ## Design notes
//!
//! * **Layout**: `coefficients[k][j]` weights `feature[j]^(k+1)`, so the
//!   outer index is the degree term and the inner index is the feature.
//! * **Powers**: Each feature's powers are built incrementally with
//!   `math::powers`, one multiplication per term.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Prediction**: `bias + Σ_k Σ_j coefficients[k][j] * x_j^(k+1)`.
//! * **Unfitted model**: zero degree, zero features; predicts `bias`.
//!
//! ## Invariants
//!
//! * Every coefficient row has exactly `feature_count` entries.
//! * Degree and feature count only change through `initialize` or `from_parts`.
//! * Prediction never mutates the model.
//!
//! ## Non-goals
//!
//! * This module does not train the model (see `engine::executor`).
//! * This module does not serialize the model.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use rand::Rng;

// Internal dependencies
use crate::algorithms::gradient::Gradients;
use crate::algorithms::initialization::InitPolicy;
use crate::algorithms::stability::guard;
use crate::math::norms::l2_norm;
use crate::math::powers::powers;
use crate::primitives::errors::PolyRegError;

// ============================================================================
// Polynomial Model
// ============================================================================

/// Multivariate polynomial without cross terms.
///
/// Holds a bias and a `degree × feature_count` coefficient matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialModel<T> {
    bias: T,
    coefficients: Vec<Vec<T>>,
    feature_count: usize,
}

impl<T: Float> Default for PolynomialModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> PolynomialModel<T> {
    /// Create an empty, unfitted model with a zero bias.
    pub fn new() -> Self {
        Self {
            bias: T::zero(),
            coefficients: Vec::new(),
            feature_count: 0,
        }
    }

    /// Build a model from explicit parameters.
    ///
    /// The feature count is taken from the first coefficient row. All rows
    /// must have the same length.
    pub fn from_parts(bias: T, coefficients: Vec<Vec<T>>) -> Result<Self, PolyRegError> {
        let feature_count = coefficients.first().map_or(0, Vec::len);
        for (row, c) in coefficients.iter().enumerate() {
            if c.len() != feature_count {
                return Err(PolyRegError::InvalidModelShape {
                    row,
                    expected: feature_count,
                    got: c.len(),
                });
            }
        }

        Ok(Self {
            bias,
            coefficients,
            feature_count,
        })
    }

    /// Draw fresh random parameters for a `degree × feature_count` polynomial.
    ///
    /// Any previous fit is discarded.
    pub fn initialize<G: Rng + ?Sized>(
        &mut self,
        degree: usize,
        feature_count: usize,
        policy: InitPolicy,
        rng: &mut G,
    ) {
        self.bias = policy.draw(rng);
        self.coefficients = (0..degree)
            .map(|_| (0..feature_count).map(|_| policy.draw(rng)).collect())
            .collect();
        self.feature_count = feature_count;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Constant term.
    #[inline]
    pub fn bias(&self) -> T {
        self.bias
    }

    /// Coefficient matrix indexed by `[degree term][feature]`.
    #[inline]
    pub fn coefficients(&self) -> &[Vec<T>] {
        &self.coefficients
    }

    /// Polynomial degree (number of coefficient rows).
    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len()
    }

    /// Number of features each input vector must have.
    #[inline]
    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    /// Whether the model carries coefficients.
    #[inline]
    pub fn is_fitted(&self) -> bool {
        !self.coefficients.is_empty()
    }

    /// Euclidean norm of all coefficients (the bias is excluded).
    pub fn coefficient_norm(&self) -> T {
        l2_norm(self.coefficients.iter().flatten().copied())
    }

    // ========================================================================
    // Prediction
    // ========================================================================

    /// Predict the output for one feature vector.
    ///
    /// An unfitted model returns its bias for any input.
    pub fn predict(&self, features: &[T]) -> Result<T, PolyRegError> {
        if self.is_fitted() && features.len() != self.feature_count {
            return Err(PolyRegError::FeatureCountMismatch {
                row: 0,
                expected: self.feature_count,
                got: features.len(),
            });
        }
        Ok(self.evaluate(features))
    }

    /// Predict the output for every row of a feature matrix.
    pub fn predict_many<R: AsRef<[T]>>(&self, features: &[R]) -> Result<Vec<T>, PolyRegError> {
        features
            .iter()
            .enumerate()
            .map(|(row, x)| {
                self.predict(x.as_ref())
                    .map_err(|err| match err {
                        PolyRegError::FeatureCountMismatch { expected, got, .. } => {
                            PolyRegError::FeatureCountMismatch { row, expected, got }
                        }
                        other => other,
                    })
            })
            .collect()
    }

    /// Evaluate the polynomial without checking the input length.
    #[inline]
    pub(crate) fn evaluate(&self, features: &[T]) -> T {
        let degree = self.degree();
        let mut value = self.bias;
        for (j, &x) in features.iter().enumerate().take(self.feature_count) {
            for (k, p) in powers(x).take(degree).enumerate() {
                value = value + self.coefficients[k][j] * p;
            }
        }
        value
    }

    // ========================================================================
    // Update
    // ========================================================================

    /// Move every parameter against its gradient.
    ///
    /// Non-finite results are redrawn from `[0, 1)`. Returns the number of
    /// parameters that had to be reset.
    pub(crate) fn apply_gradients<G: Rng + ?Sized>(
        &mut self,
        gradients: &Gradients<T>,
        learning_rate: T,
        rng: &mut G,
    ) -> usize {
        let mut resets = 0;

        self.bias = self.bias - learning_rate * gradients.d_bias;
        if guard(&mut self.bias, rng) {
            resets += 1;
        }

        for (row, d_row) in self
            .coefficients
            .iter_mut()
            .zip(gradients.d_coefficients.iter())
        {
            for (c, &d) in row.iter_mut().zip(d_row.iter()) {
                *c = *c - learning_rate * d;
                if guard(c, rng) {
                    resets += 1;
                }
            }
        }

        resets
    }
}
