//! Execution engine for gradient-descent training.
//!
//! ## Purpose
//!
//! This module orchestrates training of a `PolynomialModel`. It handles
//! initialization, the iteration loop, parameter updates with the stability
//! guard, convergence checking, and result assembly.
//!
//! ## Design notes
//!
//! * Validates inputs once per entry point, then runs unchecked inner loops.
//! * Reuses one `Gradients` buffer across all iterations of a run.
//! * Takes the random source as an explicit `rand::Rng` handle.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! * **Execution Loop**: Gradients -> Update -> Guard -> Convergence check.
//! * **Full batch**: every iteration uses the entire training set.
//! * **Convergence**: summed absolute gradient below tolerance (default), or
//!   absolute cost change below tolerance.
//!
//! ## Invariants
//!
//! * Validation failures leave the model untouched.
//! * After every update all parameters are finite.
//! * Iteration count never exceeds `max_steps`.
//!
//! ## Non-goals
//!
//! * This module does not shuffle or mini-batch the data.
//! * This module does not provide cancellation beyond `max_steps` and tolerance.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, trace, warn};
use num_traits::Float;
use rand::Rng;

// Internal dependencies
use crate::algorithms::gradient::{accumulate_gradients, mean_squared_error, Gradients};
use crate::algorithms::initialization::InitPolicy;
use crate::algorithms::polynomial::PolynomialModel;
use crate::engine::output::{TrainingHistory, TrainingResult};
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::scalar::to_f64;
use crate::primitives::errors::PolyRegError;

// ============================================================================
// Convergence Criterion
// ============================================================================

/// Signal used to stop training early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvergenceCriterion {
    /// Stop when `|d_bias| + Σ |d_coefficients|` drops below the tolerance.
    #[default]
    GradientMagnitude,

    /// Stop when the cost changes by less than the tolerance between iterations.
    CostDelta,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig<T> {
    /// Polynomial degree (number of power terms per feature).
    pub degree: usize,

    /// Gradient-descent step size.
    pub learning_rate: T,

    /// Maximum number of iterations.
    pub max_steps: usize,

    /// L2 regularization strength applied to coefficients.
    pub lambda: T,

    /// Early-stopping threshold for the convergence criterion.
    pub tolerance: T,

    /// How initial parameters are drawn.
    pub initialization: InitPolicy,

    /// Which signal is compared against the tolerance.
    pub convergence: ConvergenceCriterion,

    /// Record per-iteration cost and delta.
    pub return_history: bool,
}

// ============================================================================
// Step Outcome
// ============================================================================

/// Result of a single descent step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome<T> {
    /// Gradients computed before the update.
    pub gradients: Gradients<T>,

    /// Parameters redrawn by the stability guard during the update.
    pub resets: usize,
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless driver for cost evaluation, single steps, and full training runs.
pub struct TrainingExecutor;

impl TrainingExecutor {
    /// Compute cost and gradients of a fitted model on a dataset.
    pub fn cost_and_gradients<T: Float, R: AsRef<[T]>>(
        model: &PolynomialModel<T>,
        features: &[R],
        targets: &[T],
        lambda: T,
    ) -> Result<Gradients<T>, PolyRegError> {
        Self::validate_against_model(model, features, targets)?;
        Validator::validate_lambda(lambda)?;

        let mut gradients = Gradients::zeros(model.degree(), model.feature_count());
        accumulate_gradients(model, features, targets, lambda, &mut gradients);
        Ok(gradients)
    }

    /// Mean squared error of a fitted model on a dataset.
    pub fn cost<T: Float, R: AsRef<[T]>>(
        model: &PolynomialModel<T>,
        features: &[R],
        targets: &[T],
    ) -> Result<T, PolyRegError> {
        Self::validate_against_model(model, features, targets)?;
        Ok(mean_squared_error(model, features, targets))
    }

    /// Fit-quality diagnostics of a fitted model on a dataset.
    pub fn diagnostics<T: Float, R: AsRef<[T]>>(
        model: &PolynomialModel<T>,
        features: &[R],
        targets: &[T],
    ) -> Result<Diagnostics<T>, PolyRegError> {
        Self::validate_against_model(model, features, targets)?;
        let predictions: Vec<T> = features.iter().map(|x| model.evaluate(x.as_ref())).collect();
        Ok(Diagnostics::compute(targets, &predictions))
    }

    /// Perform one gradient-descent step on a fitted model.
    ///
    /// Parameters are updated in place; non-finite results are redrawn.
    pub fn step<T: Float, R: AsRef<[T]>, G: Rng + ?Sized>(
        model: &mut PolynomialModel<T>,
        features: &[R],
        targets: &[T],
        learning_rate: T,
        lambda: T,
        rng: &mut G,
    ) -> Result<StepOutcome<T>, PolyRegError> {
        Self::validate_against_model(model, features, targets)?;
        Validator::validate_learning_rate(learning_rate)?;
        Validator::validate_lambda(lambda)?;

        let mut gradients = Gradients::zeros(model.degree(), model.feature_count());
        accumulate_gradients(model, features, targets, lambda, &mut gradients);
        let resets = model.apply_gradients(&gradients, learning_rate, rng);
        if resets > 0 {
            warn!("stability guard redrew {} non-finite parameter(s)", resets);
        }

        Ok(StepOutcome { gradients, resets })
    }

    /// Initialize `model` and train it with full-batch gradient descent.
    ///
    /// Any previous fit is discarded. Inputs and configuration are validated
    /// before the model is touched.
    pub fn run<T: Float, R: AsRef<[T]>, G: Rng + ?Sized>(
        model: &mut PolynomialModel<T>,
        features: &[R],
        targets: &[T],
        config: &TrainingConfig<T>,
        rng: &mut G,
    ) -> Result<TrainingResult<T>, PolyRegError> {
        Self::validate_config(config)?;
        let feature_count = Validator::validate_inputs(features, targets, None)?;

        model.initialize(config.degree, feature_count, config.initialization, rng);
        debug!(
            "training degree {} polynomial on {} examples x {} features (max_steps={}, learning_rate={}, lambda={})",
            config.degree,
            features.len(),
            feature_count,
            config.max_steps,
            to_f64(config.learning_rate),
            to_f64(config.lambda)
        );

        let mut gradients = Gradients::zeros(config.degree, feature_count);
        let mut history = config
            .return_history
            .then(|| TrainingHistory::with_capacity(config.max_steps.min(4096)));

        let mut final_delta = T::zero();
        let mut final_cost = None;
        let mut previous_cost = T::max_value();
        let mut iterations = config.max_steps;
        let mut converged = false;
        let mut stability_resets = 0;

        for iteration in 0..config.max_steps {
            accumulate_gradients(model, features, targets, config.lambda, &mut gradients);
            let resets = model.apply_gradients(&gradients, config.learning_rate, rng);
            if resets > 0 {
                warn!(
                    "iteration {}: stability guard redrew {} non-finite parameter(s)",
                    iteration, resets
                );
                stability_resets += resets;
            }

            let delta = gradients.magnitude();
            let cost = gradients.cost;
            final_delta = delta;
            final_cost = Some(cost);

            if let Some(h) = history.as_mut() {
                h.costs.push(cost);
                h.deltas.push(delta);
            }
            trace!(
                "iteration {}: cost={} delta={}",
                iteration,
                to_f64(cost),
                to_f64(delta)
            );

            let signal = match config.convergence {
                ConvergenceCriterion::GradientMagnitude => delta,
                ConvergenceCriterion::CostDelta => (cost - previous_cost).abs(),
            };
            previous_cost = cost;

            if signal < config.tolerance {
                iterations = iteration + 1;
                converged = true;
                break;
            }
        }

        debug!(
            "training finished after {} iteration(s): converged={} delta={}",
            iterations,
            converged,
            to_f64(final_delta)
        );

        Ok(TrainingResult {
            final_delta,
            iterations,
            converged,
            final_cost,
            stability_resets,
            history,
        })
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Validate every training parameter.
    pub fn validate_config<T: Float>(config: &TrainingConfig<T>) -> Result<(), PolyRegError> {
        Validator::validate_degree(config.degree)?;
        Validator::validate_learning_rate(config.learning_rate)?;
        Validator::validate_lambda(config.lambda)?;
        Validator::validate_tolerance(config.tolerance)?;
        Ok(())
    }

    /// Validate a dataset against the feature count of a fitted model.
    fn validate_against_model<T: Float, R: AsRef<[T]>>(
        model: &PolynomialModel<T>,
        features: &[R],
        targets: &[T],
    ) -> Result<(), PolyRegError> {
        if !model.is_fitted() {
            return Err(PolyRegError::NotFitted);
        }
        Validator::validate_inputs(features, targets, Some(model.feature_count()))?;
        Ok(())
    }
}
