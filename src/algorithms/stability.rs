//! Numerical-stability guard for parameter updates.
//!
//! ## Purpose
//!
//! A descent step with an oversized learning rate, or large features raised
//! to high powers, can overflow a parameter to infinity or NaN. Such a value
//! would poison every later prediction and gradient. The guard replaces it
//! with a fresh draw from `[0, 1)` so training can continue.
//!
//! ## Invariants
//!
//! * After `guard` returns, the value is finite.
//! * Finite values are never modified.
//!
//! ## Non-goals
//!
//! * This module does not detect slow divergence that stays finite.
//! * This module does not halt training or report an error.

use num_traits::Float;
use rand::Rng;

use crate::algorithms::initialization::unit_draw;

/// Replace a non-finite value with a uniform draw from `[0, 1)`.
///
/// Returns `true` if the value was reset.
#[inline]
pub fn guard<T: Float, G: Rng + ?Sized>(value: &mut T, rng: &mut G) -> bool {
    if value.is_finite() {
        return false;
    }
    *value = unit_draw(rng);
    true
}
