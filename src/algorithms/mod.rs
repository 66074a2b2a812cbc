//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the numerical core of polynomial regression:
//! - The polynomial model and its prediction
//! - Cost and gradient computation with L2 regularization
//! - Random parameter initialization
//! - The guard that repairs non-finite parameters after an update
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Polynomial model and prediction.
pub mod polynomial;

/// Cost and gradient computation.
pub mod gradient;

/// Random initialization policies.
pub mod initialization;

/// Non-finite parameter recovery.
pub mod stability;
