//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer measures how well a fitted model explains a labeled dataset.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit-quality metrics.
pub mod diagnostics;
