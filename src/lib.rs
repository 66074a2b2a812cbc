//! # polyreg-rs — Polynomial Regression by Gradient Descent
//!
//! Fits a multivariate polynomial of configurable degree to labeled numeric
//! observations using full-batch gradient descent with L2 (ridge)
//! regularization, then predicts outputs for new feature vectors.
//!
//! ## The Model
//!
//! For `F` features and degree `D` the fitted function is
//!
//! ```text
//! y = bias + Σ_{k=0}^{D-1} Σ_{j=0}^{F-1} coefficients[k][j] * x_j^(k+1)
//! ```
//!
//! Each feature gets its own powers `x_j, x_j^2, ..., x_j^D`; there are no
//! cross terms between features.
//!
//! **How training works:**
//!
//! 1. Draw the bias and every coefficient at random (see [`InitPolicy`](prelude::InitPolicy))
//! 2. Compute the mean squared error and its gradients over the whole dataset
//! 3. Step every parameter against its gradient, adding `lambda * c` to each
//!    coefficient gradient (the bias is never penalized)
//! 4. Redraw any parameter that overflowed to NaN or infinity
//! 5. Stop when the summed absolute gradient drops below `tolerance`, or after `max_steps`
//!
//! ## Quick Start
//!
//! ```rust
//! use polyreg_rs::prelude::*;
//!
//! // y = 2x + 1 sampled on [0, 1]
//! let features: Vec<Vec<f64>> = (0..=10).map(|i| vec![i as f64 / 10.0]).collect();
//! let targets: Vec<f64> = features.iter().map(|x| 2.0 * x[0] + 1.0).collect();
//!
//! let mut model = PolyReg::new()
//!     .degree(1)
//!     .learning_rate(0.5)
//!     .max_steps(100_000)
//!     .tolerance(1e-8)
//!     .seed(42)
//!     .build()?;
//!
//! let result = model.fit(&features, &targets)?;
//! assert!(result.converged);
//!
//! let y = model.predict(&[0.25])?;
//! assert!((y - 1.5).abs() < 1e-4);
//! # Result::<(), PolyRegError>::Ok(())
//! ```
//!
//! ### Two Features, Degree Two
//!
//! ```rust
//! use polyreg_rs::prelude::*;
//!
//! // y = 3*x1 + 2*x2^2
//! let features = [
//!     [1.0, 4.0], [2.0, 6.0], [3.0, 8.0], [4.0, 2.0],
//!     [5.0, 9.0], [6.0, 1.0], [7.0, 4.0], [8.0, 4.0],
//!     [9.0, 3.0], [10.0, 6.0], [11.0, 7.0], [12.0, 0.0],
//! ];
//! let targets: [f64; 12] = [35.0, 78.0, 137.0, 20.0, 177.0, 20.0, 53.0, 56.0, 45.0, 102.0, 131.0, 36.0];
//!
//! let mut model = PolyReg::new()
//!     .degree(2)
//!     .learning_rate(0.00025)
//!     .max_steps(20_000)
//!     .seed(7)
//!     .build()?;
//!
//! let result = model.fit(&features, &targets)?;
//! println!("{}", result);
//!
//! let y = model.predict(&[5.0, 5.0])?;
//! assert!((y - 65.0).abs() / 65.0 < 0.05);
//! # Result::<(), PolyRegError>::Ok(())
//! ```
//!
//! The printed summary has this shape (figures vary with the seed):
//!
//! ```text
//! Summary:
//!   Iterations: 20000
//!   Converged: no
//!   Final delta: 1.4e-1
//!   Final cost: 0.04
//!   Stability resets: 0
//! ```
//!
//! ## Parameters
//!
//! | Parameter          | Default             | Range/Options                      | Description                                   |
//! |--------------------|---------------------|------------------------------------|-----------------------------------------------|
//! | **degree**         | 2                   | [1, ∞)                             | Highest exponent applied to each feature      |
//! | **learning_rate**  | 1e-4                | (0, ∞)                             | Gradient-descent step size                    |
//! | **max_steps**      | 10_000              | [0, ∞)                             | Iteration cap                                 |
//! | **lambda**         | 0                   | [0, ∞)                             | L2 penalty on coefficients                    |
//! | **tolerance**      | 1e-6                | [0, ∞)                             | Early-stopping threshold (0 disables it)      |
//! | **seed**           | None (entropy)      | any `u64`                          | Seed for initialization and stability resets  |
//! | **initialization** | `UnitUniform`       | `UnitUniform`, `IntegerRange`      | How starting parameters are drawn             |
//! | **convergence**    | `GradientMagnitude` | `GradientMagnitude`, `CostDelta`   | Signal compared against `tolerance`           |
//! | **return_history** | false               | true/false                         | Record per-iteration cost and delta           |
//!
//! Setting the same parameter twice makes `build()` fail with
//! `PolyRegError::DuplicateParameter`.
//!
//! ### Learning Rate
//!
//! Features are raised to powers up to `degree`, so gradient magnitudes grow
//! quickly with feature scale. A learning rate that is too large makes
//! parameters overflow; the stability guard then redraws them from `[0, 1)`
//! and counts the event in `TrainingResult::stability_resets`. Frequent
//! resets mean the learning rate should be lowered (or the features rescaled).
//!
//! ### Convergence
//!
//! - `GradientMagnitude`: stop when `|d_bias| + Σ |d_coefficients| < tolerance`.
//! - `CostDelta`: stop when the mean squared error changes by less than
//!   `tolerance` between two iterations.
//!
//! ### Bringing Your Own Random Source
//!
//! `fit` creates a `StdRng` from the configured seed. To control the random
//! source directly, call `train` with any `rand::Rng`:
//!
//! ```rust
//! use polyreg_rs::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let features = vec![vec![0.0], vec![0.5], vec![1.0]];
//! let targets = vec![1.0, 2.0, 3.0];
//!
//! let mut model = PolyReg::new().degree(1).learning_rate(0.5).build()?;
//! let mut rng = StdRng::seed_from_u64(1);
//! let result = model.train(&features, &targets, &mut rng)?;
//! assert!(result.iterations <= 10_000);
//! # Result::<(), PolyRegError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Shape problems are reported as errors before the model is touched:
//!
//! ```rust
//! use polyreg_rs::prelude::*;
//!
//! let mut model = PolyReg::new().build()?;
//! let err = model.fit(&[vec![1.0], vec![2.0]], &[1.0]).unwrap_err();
//! assert_eq!(
//!     err,
//!     PolyRegError::MismatchedInputs { features_len: 2, targets_len: 1 }
//! );
//! # Result::<(), PolyRegError>::Ok(())
//! ```
//!
//! Numeric divergence is never an error; it is repaired in place.
//!
//! ## Logging
//!
//! Training emits records through the `log` facade: `debug` at the start and
//! end of a run, `trace` for every iteration, and `warn` when the stability
//! guard redraws a parameter. Install any `log`-compatible logger to see them.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to remove the standard library dependency. Without
//! `std`, an unseeded regressor uses a fixed seed instead of system entropy.
//!
//! ```toml
//! [dependencies]
//! polyreg-rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - shared basic types.
//
// Contains the crate-wide error type.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains power expansion, norms, and scalar conversions.
mod math;

// Layer 3: Algorithms - the numerical core.
//
// Contains the polynomial model, cost/gradient computation, random
// initialization, and the non-finite parameter guard.
mod algorithms;

// Layer 4: Evaluation - fit-quality metrics.
//
// Contains MSE, RMSE, MAE, and R^2 diagnostics.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains validation, the training loop, and result types.
mod engine;

// Layer 6: API - builder and regressor.
//
// Provides the `PolyReg` builder and the `PolynomialRegressor` it produces.
mod api;
mod regressor;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use polyreg_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ConvergenceCriterion,
        ConvergenceCriterion::{CostDelta, GradientMagnitude},
        Diagnostics, Gradients, InitPolicy,
        InitPolicy::{IntegerRange, UnitUniform},
        PolyRegBuilder as PolyReg, PolyRegError, PolynomialModel, PolynomialRegressor,
        StepOutcome, TrainingConfig, TrainingHistory, TrainingResult,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation metrics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
