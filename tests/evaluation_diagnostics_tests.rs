#![cfg(feature = "dev")]
//! Tests for fit-quality diagnostics.
//!
//! ## Test Organization
//!
//! 1. **Metrics** - MSE, RMSE, MAE, R^2 values
//! 2. **Edge Cases** - Constant targets
//! 3. **Display** - Formatted summary

use approx::assert_relative_eq;

use polyreg_rs::internals::evaluation::diagnostics::Diagnostics;

// ============================================================================
// Metrics
// ============================================================================

/// Hand-computed metrics for a small residual vector.
#[test]
fn test_metrics() {
    let targets = [1.0, 2.0, 3.0, 4.0];
    let predictions = [1.5, 2.0, 2.0, 4.0];
    let d = Diagnostics::compute(&targets, &predictions);

    // residuals: -0.5, 0, 1, 0
    assert_eq!(d.n, 4);
    assert_relative_eq!(d.mse, 1.25 / 4.0);
    assert_relative_eq!(d.rmse, (1.25_f64 / 4.0).sqrt());
    assert_relative_eq!(d.mae, 1.5 / 4.0);
    // ss_tot = 5
    assert_relative_eq!(d.r_squared, 1.0 - 1.25 / 5.0);
}

/// Perfect predictions give zero error and unit R^2.
#[test]
fn test_perfect_fit() {
    let targets = [3.0_f32, -1.0, 7.5];
    let d = Diagnostics::compute(&targets, &targets);
    assert_eq!(d.mse, 0.0);
    assert_eq!(d.mae, 0.0);
    assert_eq!(d.r_squared, 1.0);
}

// ============================================================================
// Edge Cases
// ============================================================================

/// Constant targets: R^2 is 1 for an exact fit, 0 otherwise.
#[test]
fn test_constant_targets() {
    let targets = [2.0, 2.0, 2.0];
    assert_eq!(Diagnostics::compute(&targets, &targets).r_squared, 1.0);
    assert_eq!(
        Diagnostics::compute(&targets, &[2.0, 2.0, 3.0]).r_squared,
        0.0
    );
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_display() {
    let d = Diagnostics::compute(&[1.0, 2.0], &[1.0, 2.0]);
    let text = d.to_string();
    assert!(text.starts_with("Diagnostics:"));
    assert!(text.contains("Observations: 2"));
    assert!(text.contains("R^2:  1.000000"));
}
