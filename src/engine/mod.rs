//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer drives training: it validates inputs and configuration, runs
//! the gradient-descent loop, and assembles the training result.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Training loop and single-step execution.
pub mod executor;

/// Training result types.
pub mod output;

/// Input and parameter validation.
pub mod validator;
