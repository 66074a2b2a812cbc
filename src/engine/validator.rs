//! Input validation for training configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for gradient-descent
//! parameters and labeled input data. It checks matching lengths, a
//! consistent feature count, finite values, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Shape Checks**: one target per row, every row the same length.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Parameter Bounds**: degree >= 1, learning rate > 0, lambda >= 0,
//!   tolerance >= 0.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform, pad, or truncate input data.
//! * This module does not perform the training itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scalar::to_f64;
use crate::primitives::errors::PolyRegError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for training configuration and input data.
///
/// Provides static methods that return `Result<_, PolyRegError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a labeled dataset and return its feature count.
    ///
    /// When `expected_features` is given, every row must have that length;
    /// otherwise the length of the first row is used.
    pub fn validate_inputs<T: Float, R: AsRef<[T]>>(
        features: &[R],
        targets: &[T],
        expected_features: Option<usize>,
    ) -> Result<usize, PolyRegError> {
        // Check 1: Matching lengths
        if features.len() != targets.len() {
            return Err(PolyRegError::MismatchedInputs {
                features_len: features.len(),
                targets_len: targets.len(),
            });
        }

        // Check 2: Non-empty
        let first = features.first().ok_or(PolyRegError::EmptyInput)?;

        // Check 3: Feature count
        let feature_count = match expected_features {
            Some(expected) => expected,
            None if first.as_ref().is_empty() => return Err(PolyRegError::NoFeatures),
            None => first.as_ref().len(),
        };

        // Check 4: Consistent rows with finite values
        for (i, row) in features.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != feature_count {
                return Err(PolyRegError::FeatureCountMismatch {
                    row: i,
                    expected: feature_count,
                    got: row.len(),
                });
            }
            if let Some((j, &val)) = row.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(PolyRegError::InvalidNumericValue(format!(
                    "features[{}][{}]={}",
                    i,
                    j,
                    to_f64(val)
                )));
            }
        }

        if let Some((i, &val)) = targets.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(PolyRegError::InvalidNumericValue(format!(
                "targets[{}]={}",
                i,
                to_f64(val)
            )));
        }

        Ok(feature_count)
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the polynomial degree.
    pub fn validate_degree(degree: usize) -> Result<(), PolyRegError> {
        if degree == 0 {
            return Err(PolyRegError::InvalidDegree(degree));
        }
        Ok(())
    }

    /// Validate the gradient-descent step size.
    pub fn validate_learning_rate<T: Float>(rate: T) -> Result<(), PolyRegError> {
        if !rate.is_finite() || rate <= T::zero() {
            return Err(PolyRegError::InvalidLearningRate(to_f64(rate)));
        }
        Ok(())
    }

    /// Validate the L2 regularization strength.
    pub fn validate_lambda<T: Float>(lambda: T) -> Result<(), PolyRegError> {
        if !lambda.is_finite() || lambda < T::zero() {
            return Err(PolyRegError::InvalidLambda(to_f64(lambda)));
        }
        Ok(())
    }

    /// Validate the convergence tolerance.
    ///
    /// Zero is allowed and disables early stopping.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), PolyRegError> {
        if !tol.is_finite() || tol < T::zero() {
            return Err(PolyRegError::InvalidTolerance(to_f64(tol)));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), PolyRegError> {
        if let Some(param) = duplicate_param {
            return Err(PolyRegError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
