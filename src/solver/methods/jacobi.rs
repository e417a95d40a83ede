//! Jacobi relaxation solver
//!
//! # Mathematical Background
//!
//! The Jacobi method (simultaneous displacement) iterates the discrete
//! Laplace update using only the *previous* generation of the field:
//!
//! ```text
//! u'[i,j] = (u[i-1,j] + u[i+1,j] + u[i,j-1] + u[i,j+1]) / 4
//! ```
//!
//! Every cell of the new generation u' is computed from the old generation
//! u, so the updates within one sweep are completely independent of each
//! other.
//!
//! # Characteristics
//!
//! - **Convergence rate**: spectral radius cos(π/n) on an n x n Laplace
//!   problem — the slowest of the three methods
//! - **Memory**: two full field buffers (current + next generation)
//! - **Order sensitivity**: none; sweeps are order-independent by
//!   construction, which makes the method trivially parallelizable
//!
//! # When to Use
//!
//! - Parallel evaluation of large fields (`parallel` feature)
//! - Reference results for checking the order-dependent methods
//! - Teaching: the method *is* the fixed-point statement of the problem
//!
//! # When NOT to Use
//!
//! - Iteration count matters → use Gauss-Seidel or SOR
//!
//! # Example
//!
//! ```rust,ignore
//! use relax_rs::solver::{JacobiSolver, RelaxationSolver, SolverConfiguration};
//!
//! let solver = JacobiSolver::new();
//! let result = solver.solve(&mut grid, &SolverConfiguration::default())?;
//! ```

use crate::field::RelaxationGrid;
use crate::solver;
use crate::solver::{RelaxationResult, RelaxationSolver, SolverConfiguration, Termination};
use nalgebra::DMatrix;

// =================================================================================================
// Jacobi Solver
// =================================================================================================

/// Double-buffered Jacobi relaxation solver
///
/// # Algorithm
///
/// Two generations of the field are kept: "current" (read-only source for
/// the sweep) and "next" (write target).
///
/// 1. For every cell: next = Dirichlet value if fixed, else the
///    four-neighbor average computed from *current*
/// 2. After the full sweep, measure the maximum absolute per-cell
///    difference between the two generations
/// 3. Promote next to current by swapping the buffers (no reallocation)
/// 4. Declare convergence once the sweep counter exceeds the configured
///    minimum and the measured difference falls below the tolerance;
///    stop unconditionally at the iteration limit
///
/// The whole-grid generation comparison in step 2 is deliberate: it is the
/// natural convergence measure for a method that only ever looks at the
/// previous generation, and it differs from the running in-sweep maximum
/// used by Gauss-Seidel and SOR. The two measures declare convergence at
/// slightly different sweep counts and are kept distinct on purpose.
///
/// # Parallel Sweeps
///
/// With the `parallel` feature enabled and a field larger than
/// [`parallel_threshold()`](crate::solver::parallel_threshold), the sweep
/// evaluates columns in parallel with Rayon. Because every next-generation
/// cell depends only on the read-only current generation, the parallel and
/// sequential sweeps produce bit-identical results.
///
/// # Example
///
/// ```rust
/// use relax_rs::field::RelaxationGrid;
/// use relax_rs::solver::{JacobiSolver, RelaxationSolver, SolverConfiguration};
///
/// # fn main() -> Result<(), String> {
/// let mut grid = RelaxationGrid::new(6, 6)?;
/// grid.fix_border(4.0);
/// grid.seed_uniform(0.0);
///
/// let solver = JacobiSolver::new();
/// let result = solver.solve(&mut grid, &SolverConfiguration::default())?;
///
/// assert!(result.is_converged());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JacobiSolver;

impl JacobiSolver {
    /// Create a new Jacobi solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use relax_rs::solver::{JacobiSolver, RelaxationSolver};
    ///
    /// let solver = JacobiSolver::new();
    /// assert_eq!(solver.name(), "Jacobi");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl RelaxationSolver for JacobiSolver {
    fn solve(
        &self,
        grid: &mut RelaxationGrid,
        config: &SolverConfiguration,
    ) -> Result<RelaxationResult, String> {
        // ====== Step 1: Validation ======

        // Validate configuration parameters
        config.validate()?;

        // Validate the grid (every free cell must be strictly interior)
        grid.validate()?;

        // ====== Step 2: Setup ======

        // The scratch buffer holds the next generation. It is allocated
        // once and afterwards only swapped with the grid's own buffer;
        // each sweep overwrites it completely.
        let mut scratch = grid.values().clone();

        let mut delta_history = Vec::new();
        let mut iterations = 0;
        let mut delta = f64::INFINITY;
        let mut termination = Termination::IterationLimitReached;

        // ====== Step 3: Relaxation Loop ======

        for sweep in 1..=config.max_iterations {
            // Write the next generation into scratch, reading only the
            // current generation held by the grid.
            sweep_into(grid, &mut scratch);

            // Whole-grid comparison between the two generations. Fixed
            // cells contribute zero (both generations hold the Dirichlet
            // value), so this measures how much the free field moved.
            delta = grid
                .values()
                .iter()
                .zip(scratch.iter())
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);

            // Promote the freshly computed generation; the displaced
            // buffer becomes the write target of the following sweep.
            std::mem::swap(grid.values_mut(), &mut scratch);

            // Check for numerical issues (NaN, Inf) before trusting delta
            solver::validate_field(grid, sweep)?;

            delta_history.push(delta);
            iterations = sweep;

            if sweep > config.min_iterations && delta < config.tolerance {
                termination = Termination::Converged;
                break;
            }
        }

        // ====== Step 4: Build Result ======

        let mut result = RelaxationResult::new(iterations, delta, termination, delta_history);

        result.add_metadata("solver", self.name());
        result.add_metadata("tolerance", &config.tolerance.to_string());
        result.add_metadata("iterations", &iterations.to_string());
        result.add_metadata("final max delta", &delta.to_string());

        Ok(result)
    }

    fn name(&self) -> &str {
        "Jacobi"
    }
}

// =================================================================================================
// Sweep Evaluation
// =================================================================================================

/// Fill `next` with the next generation computed from `grid`
///
/// Dispatches to the parallel path when the crate is compiled with the
/// `parallel` feature and the field exceeds the runtime threshold.
fn sweep_into(grid: &RelaxationGrid, next: &mut DMatrix<f64>) {
    #[cfg(feature = "parallel")]
    if grid.len() > crate::solver::parallel_threshold() {
        parallel_sweep_into(grid, next);
        return;
    }

    sequential_sweep_into(grid, next);
}

/// Sequential sweep: one pass over the field in storage order
fn sequential_sweep_into(grid: &RelaxationGrid, next: &mut DMatrix<f64>) {
    let (rows, cols) = grid.shape();
    for j in 0..cols {
        for i in 0..rows {
            next[(i, j)] = if grid.is_fixed(i, j) {
                grid.fixed_value(i, j)
            } else {
                grid.neighbor_average(i, j)
            };
        }
    }
}

/// Parallel sweep: columns are evaluated concurrently
///
/// The matrix storage is column-major, so each Rayon work item is one
/// contiguous column slice. The grid is only read, never written, which is
/// what makes this safe and result-identical to the sequential path.
#[cfg(feature = "parallel")]
fn parallel_sweep_into(grid: &RelaxationGrid, next: &mut DMatrix<f64>) {
    use rayon::prelude::*;

    let rows = grid.rows();
    next.as_mut_slice()
        .par_chunks_mut(rows)
        .enumerate()
        .for_each(|(j, column)| {
            for (i, cell) in column.iter_mut().enumerate() {
                *cell = if grid.is_fixed(i, j) {
                    grid.fixed_value(i, j)
                } else {
                    grid.neighbor_average(i, j)
                };
            }
        });
}

// =================================================================================================
// Tests
// =================================================================================================
