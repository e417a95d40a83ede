//! Relaxation solvers
//!
//! This module provides traits and implementations for relaxation solvers.
//! A relaxation solver iterates the grid's four-neighbor averaging rule
//! until the field stops moving (within a tolerance) or an iteration limit
//! is reached.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! The design separates concerns into two layers:
//!
//! 1. **Grid** ([`RelaxationGrid`](crate::field::RelaxationGrid)) - WHAT to solve
//!    - Field values and Dirichlet boundary cells
//!    - The averaging rule itself
//!
//! 2. **Solver** ([`RelaxationSolver`] trait) - HOW to solve it
//!    - Sweep order and neighbor-value visibility
//!    - Overcorrection policy
//!    - Convergence bookkeeping
//!
//! This separation allows the same grid to be relaxed with different
//! methods, which is the whole point of comparing them.
//!
//! # Module Organization
//!
//! - **`traits`**: Core trait definitions and types
//!   - [`RelaxationSolver`] trait: stable interface for all solvers
//!   - [`SolverConfiguration`]: convergence policy
//!   - [`RelaxationResult`] / [`Termination`]: run outcome
//!
//! - **`methods`**: Solver implementations
//!   - [`JacobiSolver`]: double-buffered, order-independent sweeps
//!   - [`GaussSeidelSolver`]: in-place sweeps using freshest values
//!   - [`SorSolver`]: Gauss-Seidel with an overcorrection factor
//!
//! # Choosing a Method
//!
//! All three converge to the same field on a well-posed Laplace problem;
//! they differ in iteration count and update-order observability:
//!
//! - **Jacobi**: slowest, but every cell update within a sweep is
//!   independent (parallelizable by construction)
//! - **Gauss-Seidel**: roughly halves Jacobi's iteration count by reading
//!   freshly updated neighbors; inherently sequential
//! - **SOR**: with a well-chosen factor in (1, 2), cuts the iteration
//!   count again, often by an order of magnitude
//!
//! # Error Handling
//!
//! All solver methods return `Result<RelaxationResult, String>`. Common
//! errors:
//! - Invalid configuration (non-positive tolerance, zero iteration limit)
//! - Malformed grid (free cell on the border)
//! - Numerical explosion (NaN/Inf mid-run, e.g. a wildly out-of-range
//!   overcorrection factor)
//!
//! Plain non-convergence is *not* an error; see [`Termination`].

// =================================================================================================
// Module Declarations
// =================================================================================================
mod methods;
mod traits;

// =================================================================================================
// Parallel Sweep Threshold
// =================================================================================================
//
// Deciding *when* to hand a Jacobi sweep off to Rayon is a numerical-
// execution concern, not a field concern, so it lives here rather than in
// field/grid.rs. Only Jacobi consults it: its two-generation update is
// order-independent within a sweep, so parallel evaluation cannot change
// observable results. Gauss-Seidel and SOR depend on sweep order and never
// parallelize.
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (useful in benchmarks and tests) without requiring a mutex on
// every sweep. Relaxed ordering is sufficient: the value is a performance
// hint, not a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of grid cells above which the Jacobi sweep switches to
/// parallel column evaluation.
///
/// The crossover is set at 4 095 cells (just under a 64 x 64 field). Below
/// that point the overhead of Rayon's thread-pool dispatch outweighs the
/// four additions and one division each cell costs.
const DEFAULT_PARALLEL_THRESHOLD: usize = 4_095;

/// Runtime-configurable parallel-sweep threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-sweep threshold.
///
/// The Jacobi solver evaluates its sweep sequentially when the grid has
/// fewer cells than this value, and switches to Rayon when it has more —
/// but only when the crate is compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use relax_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-sweep threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`. A zero-cell threshold would force
/// parallel dispatch on every single-cell sweep, which is never the
/// intended behaviour.
///
/// # Example
///
/// ```rust
/// use relax_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Prevents one test from leaking a modified
/// threshold value into the next.
///
/// ```rust,ignore
/// let _guard = crate::solver::ThresholdGuard::save(50);
/// // threshold is now 50 …
/// // … and is automatically restored when _guard is dropped.
/// ```
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so that restoring to any value (including
        // the original default) never panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{RelaxationResult, RelaxationSolver, SolverConfiguration, Termination};

pub use methods::{GaussSeidelSolver, JacobiSolver, SorSolver};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::field::RelaxationGrid;

/// Validate the field for numerical issues
///
/// Checks that the field does not contain NaN or Inf values, which would
/// indicate numerical instability (in practice: a relaxation factor far
/// outside the meaningful range blowing the iteration up).
///
/// # Arguments
///
/// * `grid` - Field to validate
/// * `sweep` - Current sweep number (for error reporting)
///
/// # Returns
///
/// `Ok(())` if the field is finite, `Err(msg)` with diagnostics otherwise
pub(crate) fn validate_field(grid: &RelaxationGrid, sweep: usize) -> Result<(), String> {
    // NaN can arise from Inf - Inf once an overcorrected update has
    // overflowed; checking both catches the explosion at its first sweep.
    if grid.values().iter().any(|x| x.is_nan()) {
        return Err(format!(
            "NaN detected in the field at sweep {}. This indicates numerical instability; \
             check the relaxation factor.",
            sweep
        ));
    }

    if grid.values().iter().any(|x| x.is_infinite()) {
        return Err(format!(
            "Infinity detected in the field at sweep {}. This indicates numerical overflow; \
             check the relaxation factor.",
            sweep
        ));
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
