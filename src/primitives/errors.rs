//! Error types for polynomial regression.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate. Errors describe invalid configuration or
//! inconsistent input shapes; they are reported before any model state is
//! mutated.
//!
//! ## Design notes
//!
//! * **Fatal only**: Only unrecoverable precondition failures are errors.
//!   Numeric divergence during a descent step is repaired in place and never
//!   surfaces here.
//! * **no_std**: `Display` is implemented by hand; `std::error::Error` is only
//!   implemented when the `std` feature is enabled.
//!
//! ## Non-goals
//!
//! * This module does not perform validation (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced while configuring, training, or querying a polynomial model.
#[derive(Debug, Clone, PartialEq)]
pub enum PolyRegError {
    /// No training examples were supplied.
    EmptyInput,

    /// The number of feature vectors differs from the number of targets.
    MismatchedInputs {
        /// Number of feature vectors.
        features_len: usize,
        /// Number of target values.
        targets_len: usize,
    },

    /// A feature vector has a length different from the expected feature count.
    FeatureCountMismatch {
        /// Index of the offending row.
        row: usize,
        /// Expected feature count.
        expected: usize,
        /// Actual length of the row.
        got: usize,
    },

    /// Feature vectors have zero length.
    NoFeatures,

    /// An input value is NaN or infinite.
    InvalidNumericValue(String),

    /// The polynomial degree is zero.
    InvalidDegree(usize),

    /// The learning rate is not a finite positive number.
    InvalidLearningRate(f64),

    /// The regularization strength is negative or not finite.
    InvalidLambda(f64),

    /// The convergence tolerance is negative or not finite.
    InvalidTolerance(f64),

    /// Coefficient rows passed to a model have inconsistent lengths.
    InvalidModelShape {
        /// Index of the offending coefficient row.
        row: usize,
        /// Expected row length.
        expected: usize,
        /// Actual row length.
        got: usize,
    },

    /// An operation requiring trained parameters was called on an unfitted model.
    NotFitted,

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for PolyRegError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyRegError::EmptyInput => write!(f, "Input arrays are empty"),
            PolyRegError::MismatchedInputs {
                features_len,
                targets_len,
            } => write!(
                f,
                "Length mismatch: features has {} rows, targets has {}",
                features_len, targets_len
            ),
            PolyRegError::FeatureCountMismatch { row, expected, got } => write!(
                f,
                "Feature count mismatch at row {}: expected {}, got {}",
                row, expected, got
            ),
            PolyRegError::NoFeatures => write!(f, "Feature vectors must not be empty"),
            PolyRegError::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            PolyRegError::InvalidDegree(degree) => {
                write!(f, "Invalid degree: {} (must be at least 1)", degree)
            }
            PolyRegError::InvalidLearningRate(rate) => write!(
                f,
                "Invalid learning rate: {} (must be > 0 and finite)",
                rate
            ),
            PolyRegError::InvalidLambda(lambda) => {
                write!(f, "Invalid lambda: {} (must be >= 0 and finite)", lambda)
            }
            PolyRegError::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {} (must be >= 0 and finite)", tol)
            }
            PolyRegError::InvalidModelShape { row, expected, got } => write!(
                f,
                "Invalid model shape: coefficient row {} has {} entries, expected {}",
                row, got, expected
            ),
            PolyRegError::NotFitted => write!(f, "Model has not been fitted"),
            PolyRegError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PolyRegError {}
