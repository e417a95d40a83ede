//! relax-rs: Relaxation Methods for the 2-D Laplace Equation
//!
//! A small framework for solving the Laplace boundary-value problem on a
//! rectangular grid with Dirichlet boundary cells, using classical
//! relaxation methods. Built with Rust for performance and safety.
//!
//! # Architecture
//!
//! relax-rs is built on two core principles:
//!
//! 1. **Separation of Field and Numerics**
//!    - The field defines the problem (grid values + boundary conditions)
//!    - Relaxation solvers provide the methods (how to iterate it)
//!
//! 2. **Interchangeable Solvers**
//!    - Trait-based design: one `RelaxationSolver` seam, three methods
//!    - Identical configuration and result types for all methods
//!    - Easy benchmarking and method comparison
//!
//! # Quick Start
//!
//! ```rust
//! use relax_rs::field::RelaxationGrid;
//! use relax_rs::solver::{GaussSeidelSolver, RelaxationSolver, SolverConfiguration};
//!
//! # fn main() -> Result<(), String> {
//! // 1. Build a grid with a fixed (Dirichlet) boundary ring
//! let mut grid = RelaxationGrid::new(5, 5)?;
//! grid.fix_border(10.0);
//! grid.seed_uniform(0.0);
//!
//! // 2. Configure convergence: tolerance, min sweeps, max sweeps
//! let config = SolverConfiguration::new(1e-6, 1, 10_000);
//!
//! // 3. Relax the field in place
//! let solver = GaussSeidelSolver::new();
//! let result = solver.solve(&mut grid, &config)?;
//!
//! // 4. Inspect the outcome
//! assert!(result.is_converged());
//! assert!((grid.value(2, 2) - 10.0).abs() < 1e-6);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`field`]: The scalar field and its boundary bookkeeping
//! - [`solver`]: Relaxation solvers (Jacobi, Gauss-Seidel, SOR)
//! - [`problems`]: Ready-made Dirichlet boundary-value setups
//! - [`output`]: Result visualization and export

// Core modules
pub mod field;

pub mod problems;
pub mod solver;

pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use relax_rs::prelude::*;
    //! ```
    pub use crate::field::RelaxationGrid;
    pub use crate::solver::{GaussSeidelSolver,
                            JacobiSolver,
                            RelaxationResult,
                            RelaxationSolver,
                            SolverConfiguration,
                            SorSolver,
                            Termination};
}
