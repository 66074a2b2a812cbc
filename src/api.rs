//! High-level API for polynomial regression.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for configuring gradient-descent training and produces a
//! [`PolynomialRegressor`] ready to fit data.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Strict**: Setting a parameter twice is reported as an error.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PolyRegBuilder`] via `PolyReg::new()`.
//! 2. Chain configuration methods (`.degree()`, `.learning_rate()`, etc.).
//! 3. Call `.build()` to obtain a [`PolynomialRegressor`].

use num_traits::Float;

use crate::engine::executor::TrainingExecutor;
use crate::engine::validator::Validator;
use crate::math::scalar::from_f64;

// Publicly re-exported types
pub use crate::algorithms::gradient::Gradients;
pub use crate::algorithms::initialization::InitPolicy;
pub use crate::algorithms::polynomial::PolynomialModel;
pub use crate::engine::executor::{ConvergenceCriterion, StepOutcome, TrainingConfig};
pub use crate::engine::output::{TrainingHistory, TrainingResult};
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::PolyRegError;
pub use crate::regressor::PolynomialRegressor;

/// Fluent builder for configuring polynomial regression training.
#[derive(Debug, Clone)]
pub struct PolyRegBuilder<T: Float> {
    /// Polynomial degree (default: 2).
    pub degree: Option<usize>,

    /// Gradient-descent step size (default: 1e-4).
    pub learning_rate: Option<T>,

    /// Iteration cap (default: 10_000).
    pub max_steps: Option<usize>,

    /// L2 regularization strength (default: 0).
    pub lambda: Option<T>,

    /// Early-stopping threshold (default: 1e-6).
    pub tolerance: Option<T>,

    /// Seed for the random source used by `fit`.
    pub seed: Option<u64>,

    /// Initialization policy (default: UnitUniform).
    pub initialization: Option<InitPolicy>,

    /// Convergence criterion (default: GradientMagnitude).
    pub convergence: Option<ConvergenceCriterion>,

    /// Record per-iteration history.
    pub return_history: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for PolyRegBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> PolyRegBuilder<T> {
    /// Default polynomial degree.
    pub const DEFAULT_DEGREE: usize = 2;

    /// Default iteration cap.
    pub const DEFAULT_MAX_STEPS: usize = 10_000;

    /// Default learning rate.
    pub const DEFAULT_LEARNING_RATE: f64 = 1e-4;

    /// Default convergence tolerance.
    pub const DEFAULT_TOLERANCE: f64 = 1e-6;

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            degree: None,
            learning_rate: None,
            max_steps: None,
            lambda: None,
            tolerance: None,
            seed: None,
            initialization: None,
            convergence: None,
            return_history: None,
            duplicate_param: None,
        }
    }

    /// Set the polynomial degree (highest exponent applied to each feature).
    pub fn degree(mut self, degree: usize) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Set the gradient-descent step size.
    pub fn learning_rate(mut self, rate: T) -> Self {
        if self.learning_rate.is_some() {
            self.duplicate_param = Some("learning_rate");
        }
        self.learning_rate = Some(rate);
        self
    }

    /// Set the maximum number of iterations.
    pub fn max_steps(mut self, steps: usize) -> Self {
        if self.max_steps.is_some() {
            self.duplicate_param = Some("max_steps");
        }
        self.max_steps = Some(steps);
        self
    }

    /// Set the L2 (ridge) regularization strength. The bias is never penalized.
    pub fn lambda(mut self, lambda: T) -> Self {
        if self.lambda.is_some() {
            self.duplicate_param = Some("lambda");
        }
        self.lambda = Some(lambda);
        self
    }

    /// Set the early-stopping tolerance. Zero disables early stopping.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Seed the random source used for initialization and stability resets.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Set how initial parameters are drawn.
    pub fn initialization(mut self, policy: InitPolicy) -> Self {
        if self.initialization.is_some() {
            self.duplicate_param = Some("initialization");
        }
        self.initialization = Some(policy);
        self
    }

    /// Set the signal compared against the tolerance.
    pub fn convergence(mut self, criterion: ConvergenceCriterion) -> Self {
        if self.convergence.is_some() {
            self.duplicate_param = Some("convergence");
        }
        self.convergence = Some(criterion);
        self
    }

    /// Record per-iteration cost and delta in the training result.
    pub fn return_history(mut self) -> Self {
        self.return_history = Some(true);
        self
    }

    /// Validate the configuration and build a regressor.
    pub fn build(self) -> Result<PolynomialRegressor<T>, PolyRegError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = TrainingConfig {
            degree: self.degree.unwrap_or(Self::DEFAULT_DEGREE),
            learning_rate: self
                .learning_rate
                .unwrap_or_else(|| from_f64(Self::DEFAULT_LEARNING_RATE)),
            max_steps: self.max_steps.unwrap_or(Self::DEFAULT_MAX_STEPS),
            lambda: self.lambda.unwrap_or_else(T::zero),
            tolerance: self
                .tolerance
                .unwrap_or_else(|| from_f64(Self::DEFAULT_TOLERANCE)),
            initialization: self.initialization.unwrap_or_default(),
            convergence: self.convergence.unwrap_or_default(),
            return_history: self.return_history.unwrap_or(false),
        };

        TrainingExecutor::validate_config(&config)?;

        Ok(PolynomialRegressor::new(config, self.seed))
    }
}
