//! Random parameter initialization.
//!
//! ## Purpose
//!
//! Gradient descent starts from randomly drawn parameters. This module
//! defines the available draw policies and the single-value draw used both
//! for initialization and for resetting diverged parameters.
//!
//! ## Design notes
//!
//! * **Explicit RNG**: Every draw takes a caller-supplied `rand::Rng`, so a
//!   seeded generator reproduces a fit exactly.
//! * **Generics**: Draws are made in `f64` and converted to `T`.
//!
//! ## Key concepts
//!
//! * **UnitUniform**: independent draws from `[0, 1)`.
//! * **IntegerRange**: independent uniform integers in `[-10, 10]`.
//!
//! ## Non-goals
//!
//! * This module does not choose a policy based on the data.

use num_traits::Float;
use rand::Rng;

use crate::math::scalar::from_f64;

// ============================================================================
// Initialization Policy
// ============================================================================

/// How the bias and coefficients are drawn before training starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitPolicy {
    /// Uniform real values in `[0, 1)` (default).
    #[default]
    UnitUniform,

    /// Uniform integer values in `[-10, 10]`.
    IntegerRange,
}

impl InitPolicy {
    /// Lower bound of `IntegerRange` draws.
    pub const INTEGER_LOW: i32 = -10;

    /// Upper bound (inclusive) of `IntegerRange` draws.
    pub const INTEGER_HIGH: i32 = 10;

    /// Draw one parameter value according to this policy.
    #[inline]
    pub fn draw<T: Float, G: Rng + ?Sized>(&self, rng: &mut G) -> T {
        match self {
            InitPolicy::UnitUniform => unit_draw(rng),
            InitPolicy::IntegerRange => {
                from_f64(f64::from(rng.random_range(Self::INTEGER_LOW..=Self::INTEGER_HIGH)))
            }
        }
    }
}

/// Draw a value uniformly from `[0, 1)`.
#[inline]
pub fn unit_draw<T: Float, G: Rng + ?Sized>(rng: &mut G) -> T {
    from_f64(rng.random::<f64>())
}
