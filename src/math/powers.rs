//! Successive powers of a feature value.
//!
//! ## Purpose
//!
//! Polynomial terms need `x, x^2, ..., x^D` for every feature. This module
//! yields them by repeated multiplication so each power costs one multiply.
//!
//! ## Invariants
//!
//! * The first item is `x` itself (exponent 1); exponent 0 is never produced.
//! * The sequence is unbounded; callers limit it with `take(degree)`.

use num_traits::Float;

/// Iterator over `x^1, x^2, x^3, ...`.
#[derive(Debug, Clone, Copy)]
pub struct Powers<T> {
    base: T,
    current: T,
}

impl<T: Float> Iterator for Powers<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.current = self.current * self.base;
        Some(self.current)
    }
}

/// Powers of `x` starting at exponent 1.
#[inline]
pub fn powers<T: Float>(x: T) -> Powers<T> {
    Powers {
        base: x,
        current: T::one(),
    }
}
