//! Norms over parameter and gradient values.
//!
//! ## Purpose
//!
//! The training loop judges convergence by the summed absolute gradient (L1),
//! and shrinkage from ridge regularization is measured with the L2 norm.
//!
//! ## Invariants
//!
//! * All norms are >= 0 for finite input.
//! * Empty input yields zero.

use num_traits::Float;

/// Sum of absolute values.
#[inline]
pub fn l1_norm<T: Float, I: IntoIterator<Item = T>>(values: I) -> T {
    values.into_iter().fold(T::zero(), |acc, v| acc + v.abs())
}

/// Sum of squared values.
#[inline]
pub fn sum_squares<T: Float, I: IntoIterator<Item = T>>(values: I) -> T {
    values.into_iter().fold(T::zero(), |acc, v| acc + v * v)
}

/// Euclidean norm.
#[inline]
pub fn l2_norm<T: Float, I: IntoIterator<Item = T>>(values: I) -> T {
    sum_squares(values).sqrt()
}
