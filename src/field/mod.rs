//! Scalar field and boundary bookkeeping
//!
//! This module provides the data model shared by every relaxation solver:
//!
//! - **`RelaxationGrid`**: a rectangular scalar field with an optional set
//!   of fixed (Dirichlet) cells and the four-neighbor averaging rule
//!
//! # Core Concepts
//!
//! A grid carries three equally-shaped matrices: the current values, a
//! boolean mask of fixed cells, and the value enforced at each fixed cell.
//! Solvers never touch a fixed cell other than to reassert its value, and
//! they update free cells only through [`RelaxationGrid::neighbor_average`].
//!
//! The grid is **problem definition**, not method: the same grid can be
//! relaxed with Jacobi, Gauss-Seidel, or SOR, and the converged field is
//! the same (up to the configured tolerance) in all three cases.

// module declaration
pub mod grid;

// re-export commonly used types for convenience
pub use grid::RelaxationGrid;
