//! Fit-quality diagnostics.
//!
//! ## Purpose
//!
//! This module summarizes prediction error on a labeled dataset, either the
//! training set or held-out points drawn from the same process.
//!
//! ## Key concepts
//!
//! * **MSE / RMSE**: mean squared error and its square root.
//! * **MAE**: mean absolute error.
//! * **R^2**: `1 - SS_res / SS_tot`.
//!
//! ## Invariants
//!
//! * MSE, RMSE and MAE are >= 0.
//! * R^2 is 1 for a perfect fit.
//!
//! ## Non-goals
//!
//! * This module does not compute intervals or standard errors.

use core::fmt::{self, Display, Formatter};
use num_traits::Float;

use crate::math::norms::{l1_norm, sum_squares};
use crate::math::scalar::{from_usize, to_f64};

/// Error statistics of predictions against observed targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Number of observations.
    pub n: usize,

    /// Mean squared error.
    pub mse: T,

    /// Root mean squared error.
    pub rmse: T,

    /// Mean absolute error.
    pub mae: T,

    /// Coefficient of determination.
    pub r_squared: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics from matching target and prediction slices.
    ///
    /// Lengths must match and be non-zero.
    pub fn compute(targets: &[T], predictions: &[T]) -> Self {
        let n = targets.len();
        let n_t = from_usize::<T>(n);

        let residuals = || targets.iter().zip(predictions).map(|(&y, &p)| y - p);
        let ss_res = sum_squares(residuals());
        let mse = ss_res / n_t;
        let mae = l1_norm(residuals()) / n_t;

        let mean = targets.iter().fold(T::zero(), |acc, &y| acc + y) / n_t;
        let ss_tot = sum_squares(targets.iter().map(|&y| y - mean));

        // Constant targets: R^2 is only meaningful for an exact fit.
        let r_squared = if ss_tot > T::zero() {
            T::one() - ss_res / ss_tot
        } else if ss_res == T::zero() {
            T::one()
        } else {
            T::zero()
        };

        Self {
            n,
            mse,
            rmse: mse.sqrt(),
            mae,
            r_squared,
        }
    }
}

impl<T: Float> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Diagnostics:")?;
        writeln!(f, "  Observations: {}", self.n)?;
        writeln!(f, "  MSE:  {:.6}", to_f64(self.mse))?;
        writeln!(f, "  RMSE: {:.6}", to_f64(self.rmse))?;
        writeln!(f, "  MAE:  {:.6}", to_f64(self.mae))?;
        write!(f, "  R^2:  {:.6}", to_f64(self.r_squared))
    }
}
