//! Configured polynomial regressor.
//!
//! ## Purpose
//!
//! `PolynomialRegressor` pairs a validated training configuration with the
//! model it trains. It is the object returned by the builder and the one
//! callers fit, query, and inspect.
//!
//! ## Design notes
//!
//! * **Delegation**: Training and evaluation are delegated to the engine.
//! * **Randomness**: `fit` creates one `StdRng` per call, seeded from the
//!   configured seed; `train` accepts any caller-supplied `rand::Rng`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * The configuration never changes after `build()`.
//! * A failed `fit`/`train` leaves the previous model untouched.
//!
//! ## Non-goals
//!
//! * This type does not persist models.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Internal dependencies
use crate::algorithms::gradient::Gradients;
use crate::algorithms::polynomial::PolynomialModel;
use crate::engine::executor::{StepOutcome, TrainingConfig, TrainingExecutor};
use crate::engine::output::TrainingResult;
use crate::evaluation::diagnostics::Diagnostics;
use crate::primitives::errors::PolyRegError;

/// Polynomial regressor trained by full-batch gradient descent.
#[derive(Debug, Clone)]
pub struct PolynomialRegressor<T> {
    config: TrainingConfig<T>,
    seed: Option<u64>,
    model: PolynomialModel<T>,
}

impl<T: Float> PolynomialRegressor<T> {
    /// Seed used when none is configured and no entropy source is available.
    #[cfg(not(feature = "std"))]
    const FALLBACK_SEED: u64 = 0x5EED_0F_9017;

    pub(crate) fn new(config: TrainingConfig<T>, seed: Option<u64>) -> Self {
        Self {
            config,
            seed,
            model: PolynomialModel::new(),
        }
    }

    // ========================================================================
    // Training
    // ========================================================================

    /// Fit the model to the data using the configured seed.
    ///
    /// Any previous fit is discarded.
    pub fn fit<R: AsRef<[T]>>(
        &mut self,
        features: &[R],
        targets: &[T],
    ) -> Result<TrainingResult<T>, PolyRegError> {
        let mut rng = self.make_rng();
        self.train(features, targets, &mut rng)
    }

    /// Fit the model to the data, drawing randomness from `rng`.
    pub fn train<R: AsRef<[T]>, G: Rng + ?Sized>(
        &mut self,
        features: &[R],
        targets: &[T],
        rng: &mut G,
    ) -> Result<TrainingResult<T>, PolyRegError> {
        TrainingExecutor::run(&mut self.model, features, targets, &self.config, rng)
    }

    /// Perform one descent step on the already-fitted model.
    pub fn step<R: AsRef<[T]>, G: Rng + ?Sized>(
        &mut self,
        features: &[R],
        targets: &[T],
        rng: &mut G,
    ) -> Result<StepOutcome<T>, PolyRegError> {
        TrainingExecutor::step(
            &mut self.model,
            features,
            targets,
            self.config.learning_rate,
            self.config.lambda,
            rng,
        )
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Cost and gradients of the current model, using the configured lambda.
    pub fn cost_and_gradients<R: AsRef<[T]>>(
        &self,
        features: &[R],
        targets: &[T],
    ) -> Result<Gradients<T>, PolyRegError> {
        TrainingExecutor::cost_and_gradients(&self.model, features, targets, self.config.lambda)
    }

    /// Mean squared error of the current model.
    pub fn cost<R: AsRef<[T]>>(&self, features: &[R], targets: &[T]) -> Result<T, PolyRegError> {
        TrainingExecutor::cost(&self.model, features, targets)
    }

    /// Fit-quality diagnostics of the current model.
    pub fn diagnostics<R: AsRef<[T]>>(
        &self,
        features: &[R],
        targets: &[T],
    ) -> Result<Diagnostics<T>, PolyRegError> {
        TrainingExecutor::diagnostics(&self.model, features, targets)
    }

    /// Predict the output for one feature vector.
    pub fn predict(&self, features: &[T]) -> Result<T, PolyRegError> {
        self.model.predict(features)
    }

    /// Predict the output for every row of a feature matrix.
    pub fn predict_many<R: AsRef<[T]>>(&self, features: &[R]) -> Result<Vec<T>, PolyRegError> {
        self.model.predict_many(features)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current model parameters.
    pub fn model(&self) -> &PolynomialModel<T> {
        &self.model
    }

    /// Consume the regressor and return the model.
    pub fn into_model(self) -> PolynomialModel<T> {
        self.model
    }

    /// Training configuration.
    pub fn config(&self) -> &TrainingConfig<T> {
        &self.config
    }

    fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            #[cfg(feature = "std")]
            None => StdRng::from_os_rng(),
            #[cfg(not(feature = "std"))]
            None => StdRng::seed_from_u64(Self::FALLBACK_SEED),
        }
    }
}
