//! Training output types.
//!
//! ## Purpose
//!
//! This module defines what a training run reports back to the caller: the
//! final convergence signal, how many iterations ran, and optional
//! per-iteration history.
//!
//! ## Invariants
//!
//! * `iterations <= max_steps` of the run that produced the result.
//! * When history is recorded, both series have exactly `iterations` entries.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::{self, Display, Formatter};
use num_traits::Float;

use crate::math::scalar::to_f64;

// ============================================================================
// History
// ============================================================================

/// Per-iteration record of a training run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrainingHistory<T> {
    /// Mean squared error measured at each iteration, before its update.
    pub costs: Vec<T>,

    /// Summed absolute gradient at each iteration.
    pub deltas: Vec<T>,
}

impl<T> TrainingHistory<T> {
    /// Empty history with room for `capacity` iterations.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            costs: Vec::with_capacity(capacity),
            deltas: Vec::with_capacity(capacity),
        }
    }

    /// Number of recorded iterations.
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    /// Whether no iteration was recorded.
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }
}

// ============================================================================
// Training Result
// ============================================================================

/// Summary of a completed training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingResult<T> {
    /// Summed absolute gradient of the last iteration (zero if none ran).
    pub final_delta: T,

    /// Number of iterations actually performed.
    pub iterations: usize,

    /// Whether the convergence criterion stopped the loop early.
    pub converged: bool,

    /// Cost measured during the last iteration, if any ran.
    pub final_cost: Option<T>,

    /// Parameters redrawn by the stability guard over the whole run.
    pub stability_resets: usize,

    /// Per-iteration history, if requested.
    pub history: Option<TrainingHistory<T>>,
}

impl<T: Float> Display for TrainingResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Iterations: {}", self.iterations)?;
        writeln!(
            f,
            "  Converged: {}",
            if self.converged { "yes" } else { "no" }
        )?;
        writeln!(f, "  Final delta: {:.6e}", to_f64(self.final_delta))?;
        match self.final_cost {
            Some(cost) => writeln!(f, "  Final cost: {:.6}", to_f64(cost))?,
            None => writeln!(f, "  Final cost: n/a")?,
        }
        write!(f, "  Stability resets: {}", self.stability_resets)
    }
}
