//! Scalar conversions.
//!
//! `num_traits::NumCast` returns `Option` even for conversions that cannot fail
//! between primitive floats. These helpers collapse the impossible `None` case
//! to NaN so that callers stay free of `unwrap`.

use num_traits::Float;

/// Convert an `f64` into `T`.
#[inline]
pub fn from_f64<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Convert a count into `T`.
#[inline]
pub fn from_usize<T: Float>(value: usize) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Convert `T` into `f64` for reporting.
#[inline]
pub fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
