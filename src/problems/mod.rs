//! Ready-made Dirichlet boundary-value setups
//!
//! This module provides the canonical Laplace problems used throughout the
//! demos, tests, and benchmarks. Each factory returns a grid with the full
//! perimeter ring fixed (so it passes
//! [`RelaxationGrid::validate`](crate::field::RelaxationGrid::validate))
//! and the interior zeroed; seed the interior afterwards if a different
//! starting field is wanted.
//!
//! # Available Problems
//!
//! - **[`uniform_box`]**: every border cell holds one value. The converged
//!   field is that same constant everywhere — the one Laplace problem with
//!   an obvious closed-form answer, which makes it the standard
//!   correctness check.
//!
//! - **[`hot_edge`]**: one hot edge, three cold edges. The classic
//!   heated-plate picture; the converged field fans out from the hot edge
//!   in smooth level curves.
//!
//! - **[`opposing_plates`]**: left and right edges at two levels, top and
//!   bottom ramping linearly between them. The converged field is the
//!   linear ramp itself, another setup with a known answer.
//!
//! # Example
//!
//! ```rust
//! use relax_rs::problems;
//! use relax_rs::solver::{GaussSeidelSolver, RelaxationSolver, SolverConfiguration};
//!
//! # fn main() -> Result<(), String> {
//! let mut grid = problems::hot_edge(20, 30, 100.0, 0.0)?;
//! let result = GaussSeidelSolver::new().solve(&mut grid, &SolverConfiguration::default())?;
//! assert!(result.is_converged());
//! # Ok(())
//! # }
//! ```

use crate::field::RelaxationGrid;

// =================================================================================================
// Problem Factories
// =================================================================================================

/// Square grid with the whole border held at one value
///
/// The unique solution of the Laplace equation with a constant boundary is
/// that constant, so after solving, every interior cell sits at
/// `boundary` (within the configured tolerance).
///
/// # Errors
///
/// Fails when `size` is zero.
pub fn uniform_box(size: usize, boundary: f64) -> Result<RelaxationGrid, String> {
    let mut grid = RelaxationGrid::new(size, size)?;
    grid.fix_border(boundary);
    Ok(grid)
}

/// Rectangular plate with the top edge held hot and the other three edges
/// held cold
///
/// Corner cells belong to the cold ring; the hot edge is the top row
/// excluding its two corners, which keeps the boundary single-valued at
/// every cell.
///
/// # Errors
///
/// Fails when either dimension is zero.
pub fn hot_edge(rows: usize, cols: usize, hot: f64, cold: f64) -> Result<RelaxationGrid, String> {
    let mut grid = RelaxationGrid::new(rows, cols)?;
    grid.fix_border(cold);

    if rows > 1 {
        for j in 1..cols.saturating_sub(1) {
            grid.set_boundary(0, j, hot)?;
        }
    }
    Ok(grid)
}

/// Rectangular plate between two plates: left edge at `left`, right edge
/// at `right`, top and bottom edges ramping linearly between them
///
/// The linear ramp is itself harmonic, so the converged interior is the
/// same ramp: `u(i, j) = left + (right - left) · j / (cols - 1)`.
///
/// # Errors
///
/// Fails when either dimension is zero.
pub fn opposing_plates(
    rows: usize,
    cols: usize,
    left: f64,
    right: f64,
) -> Result<RelaxationGrid, String> {
    let mut grid = RelaxationGrid::new(rows, cols)?;

    for j in 0..cols {
        let t = if cols > 1 {
            j as f64 / (cols - 1) as f64
        } else {
            0.0
        };
        let ramp = left + (right - left) * t;

        grid.set_boundary(0, j, ramp)?;
        grid.set_boundary(rows - 1, j, ramp)?;
    }
    for i in 0..rows {
        grid.set_boundary(i, 0, left)?;
        grid.set_boundary(i, cols - 1, right)?;
    }
    Ok(grid)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{GaussSeidelSolver, RelaxationSolver, SolverConfiguration};
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_box_shape_and_ring() {
        let grid = uniform_box(6, 4.0).unwrap();

        assert_eq!(grid.shape(), (6, 6));
        assert_eq!(grid.fixed_count(), 20);
        assert!(grid.validate().is_ok());
        assert_eq!(grid.value(0, 3), 4.0);
        assert_eq!(grid.value(3, 3), 0.0);
    }

    #[test]
    fn test_uniform_box_rejects_zero_size() {
        assert!(uniform_box(0, 1.0).is_err());
    }

    #[test]
    fn test_hot_edge_boundary_layout() {
        let grid = hot_edge(5, 7, 100.0, 0.0).unwrap();

        assert!(grid.validate().is_ok());

        // Corners stay cold, the rest of the top row is hot
        assert_eq!(grid.value(0, 0), 0.0);
        assert_eq!(grid.value(0, 6), 0.0);
        assert_eq!(grid.value(0, 3), 100.0);

        // The other edges are cold
        assert_eq!(grid.value(4, 3), 0.0);
        assert_eq!(grid.value(2, 0), 0.0);
        assert_eq!(grid.value(2, 6), 0.0);
    }

    #[test]
    fn test_opposing_plates_ramp_endpoints() {
        let grid = opposing_plates(6, 11, -5.0, 5.0).unwrap();

        assert!(grid.validate().is_ok());
        assert_eq!(grid.value(0, 0), -5.0);
        assert_eq!(grid.value(0, 10), 5.0);
        assert_relative_eq!(grid.value(0, 5), 0.0);
        assert_relative_eq!(grid.value(5, 5), 0.0);
    }

    #[test]
    fn test_opposing_plates_converges_to_linear_ramp() {
        let mut grid = opposing_plates(9, 9, 0.0, 8.0).unwrap();

        let config = SolverConfiguration::new(1e-9, 1, 10_000);
        let result = GaussSeidelSolver::new().solve(&mut grid, &config).unwrap();
        assert!(result.is_converged());

        for i in 1..8 {
            for j in 1..8 {
                let expected = 8.0 * j as f64 / 8.0;
                assert!(
                    (grid.value(i, j) - expected).abs() < 1e-6,
                    "cell ({}, {}) = {}, expected {}",
                    i,
                    j,
                    grid.value(i, j),
                    expected
                );
            }
        }
    }
}
