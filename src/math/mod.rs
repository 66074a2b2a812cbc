//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the crate:
//! - Power expansion of feature values
//! - Vector norms used for convergence and shrinkage checks
//! - Infallible scalar conversions
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Successive powers of a scalar.
pub mod powers;

/// L1/L2 norms and sums of squares.
pub mod norms;

/// Scalar conversions between `Float` and primitive types.
pub mod scalar;
