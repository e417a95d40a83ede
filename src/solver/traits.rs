//! Relaxation solver traits and types
//!
//! # Design Philosophy
//!
//! All three relaxation methods share one configuration shape and one
//! result shape:
//!
//! - `SolverConfiguration` carries the convergence policy (tolerance,
//!   minimum and maximum sweep counts)
//! - `RelaxationResult` carries the outcome (sweeps run, last measured
//!   delta, termination state, per-sweep history, metadata)
//! - `Termination` is the terminal state of the shared state machine:
//!   `Running -> {Converged, IterationLimitReached}`
//!
//! # Stability Guarantee
//!
//! - `RelaxationSolver` trait: STABLE since v0.1.0, will NEVER change
//! - Core structures: STABLE (fields won't be removed)

use crate::field::RelaxationGrid;
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Solver Configuration
// ============================================================================

/// Convergence policy shared by every relaxation solver
///
/// # Design
///
/// A sweep counter is compared against two bounds:
///
/// - convergence may only be *declared* once the counter exceeds
///   `min_iterations` (guards against a lucky first sweep on a field that
///   merely started flat)
/// - the solver always *stops* at `max_iterations`, reporting the last
///   measured delta so the caller can judge the result
///
/// # Examples
///
/// ```rust
/// use relax_rs::solver::SolverConfiguration;
///
/// let config = SolverConfiguration::new(1e-6, 1, 10_000);
/// assert!(config.validate().is_ok());
///
/// // Defaults match the common teaching setup
/// let config = SolverConfiguration::default();
/// assert_eq!(config.max_iterations, 10_000);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SolverConfiguration {
    /// Convergence criterion: a sweep whose maximum per-cell change falls
    /// below this value ends the iteration
    pub tolerance: f64,

    /// Sweep count that must be exceeded before convergence may be declared
    pub min_iterations: usize,

    /// Safety limit: the iteration always stops here
    pub max_iterations: usize,
}

impl SolverConfiguration {
    /// Create a new configuration
    pub fn new(tolerance: f64, min_iterations: usize, max_iterations: usize) -> Self {
        Self {
            tolerance,
            min_iterations,
            max_iterations,
        }
    }

    /// Create a configuration with the given tolerance and default bounds
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Default::default()
        }
    }

    /// Validate that parameters are numerically meaningful
    pub fn validate(&self) -> Result<(), String> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err("Tolerance must be positive and finite".to_string());
        }
        if self.max_iterations == 0 {
            return Err("Maximum iterations must be positive".to_string());
        }
        if self.min_iterations > self.max_iterations {
            return Err(format!(
                "Minimum iterations ({}) exceeds maximum iterations ({})",
                self.min_iterations, self.max_iterations
            ));
        }
        Ok(())
    }
}

impl Default for SolverConfiguration {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            min_iterations: 1,
            max_iterations: 10_000,
        }
    }
}

// =================================================================================================
// Termination
// =================================================================================================

/// Terminal state of a relaxation run
///
/// There are exactly two ways out of the sweep loop, and neither is an
/// error: hitting the iteration limit is a normal, reportable outcome
/// whose quality the caller judges from the returned delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The maximum per-sweep change fell below the configured tolerance
    Converged,

    /// The sweep counter reached `max_iterations` first
    IterationLimitReached,
}

impl Termination {
    /// Get name identifier
    pub fn name(&self) -> &str {
        match self {
            Termination::Converged => "Converged",
            Termination::IterationLimitReached => "IterationLimitReached",
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =================================================================================================
// Relaxation Result
// =================================================================================================

/// Outcome of a relaxation run
///
/// The relaxed field itself lives in the grid (solvers mutate it in
/// place); the result carries everything *about* the run: how many sweeps
/// it took, how much the field was still moving at the end, why the loop
/// stopped, and the full per-sweep delta history for convergence plots.
///
/// # Examples
///
/// ```rust,ignore
/// let result = solver.solve(&mut grid, &config)?;
///
/// if result.is_converged() {
///     println!("converged after {} sweeps", result.iterations);
/// } else {
///     println!("stalled at delta = {:e}", result.final_max_delta);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct RelaxationResult {
    /// Number of sweeps actually run
    pub iterations: usize,

    /// Maximum per-cell change measured in the last sweep
    pub final_max_delta: f64,

    /// Why the loop stopped
    pub termination: Termination,

    /// Maximum per-cell change of every sweep, in order
    pub delta_history: Vec<f64>,

    /// Free-form diagnostics ("solver", "tolerance", ...)
    pub metadata: HashMap<String, String>,
}

impl RelaxationResult {
    /// Create a new result
    pub fn new(
        iterations: usize,
        final_max_delta: f64,
        termination: Termination,
        delta_history: Vec<f64>,
    ) -> Self {
        Self {
            iterations,
            final_max_delta,
            termination,
            delta_history,
            metadata: HashMap::new(),
        }
    }

    /// Add a metadata entry for diagnostics and reproducibility
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Check whether the run ended by convergence
    pub fn is_converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

// =================================================================================================
// Relaxation Solver Trait
// =================================================================================================

/// Trait for relaxation solvers
///
/// # Responsibility
///
/// A solver iterates the grid's four-neighbor averaging rule, in its own
/// order and with its own overcorrection policy, until the configured
/// convergence criterion is met or the iteration limit is reached. It
/// mutates the grid **in place**; the grid is exclusively owned by the
/// calling scope for the duration of the call.
///
/// # Contract
///
/// - `config.validate()` and `grid.validate()` run before the first sweep;
///   a malformed configuration or grid is reported without touching the
///   field.
/// - Fixed cells hold their Dirichlet value exactly after every sweep.
/// - Reaching the iteration limit is NOT an error: the result reports
///   `Termination::IterationLimitReached` with the last measured delta.
/// - An `Err` is returned only for invalid inputs or a numerically
///   exploded field (NaN/Inf mid-run).
pub trait RelaxationSolver {
    /// Relax the grid in place until convergence or the iteration limit
    fn solve(
        &self,
        grid: &mut RelaxationGrid,
        config: &SolverConfiguration,
    ) -> Result<RelaxationResult, String>;

    /// Name of the method (used for display and result metadata)
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ==================================== Configuration ====================================

    #[test]
    fn test_configuration_default() {
        let config = SolverConfiguration::default();
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.min_iterations, 1);
        assert_eq!(config.max_iterations, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_configuration_with_tolerance() {
        let config = SolverConfiguration::with_tolerance(1e-9);
        assert_eq!(config.tolerance, 1e-9);
        assert_eq!(config.max_iterations, 10_000);
    }

    #[test]
    fn test_configuration_rejects_zero_tolerance() {
        let config = SolverConfiguration::new(0.0, 1, 100);
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Tolerance"));
    }

    #[test]
    fn test_configuration_rejects_negative_tolerance() {
        assert!(SolverConfiguration::new(-1e-6, 1, 100).validate().is_err());
    }

    #[test]
    fn test_configuration_rejects_nan_tolerance() {
        assert!(SolverConfiguration::new(f64::NAN, 1, 100).validate().is_err());
        assert!(SolverConfiguration::new(f64::INFINITY, 1, 100)
            .validate()
            .is_err());
    }

    #[test]
    fn test_configuration_rejects_zero_max_iterations() {
        let result = SolverConfiguration::new(1e-6, 0, 0).validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Maximum iterations"));
    }

    #[test]
    fn test_configuration_rejects_inverted_bounds() {
        let result = SolverConfiguration::new(1e-6, 50, 10).validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("exceeds"));
    }

    // ===================================== Termination =====================================

    #[test]
    fn test_termination_display() {
        assert_eq!(format!("{}", Termination::Converged), "Converged");
        assert_eq!(
            format!("{}", Termination::IterationLimitReached),
            "IterationLimitReached"
        );
    }

    // ======================================= Result =======================================

    #[test]
    fn test_result_metadata() {
        let mut result =
            RelaxationResult::new(12, 5e-7, Termination::Converged, vec![1.0, 0.1, 5e-7]);
        result.add_metadata("solver", "Jacobi");

        assert!(result.is_converged());
        assert_eq!(result.iterations, 12);
        assert_eq!(result.metadata.get("solver"), Some(&"Jacobi".to_string()));
        assert_eq!(result.delta_history.len(), 3);
    }

    #[test]
    fn test_result_limit_reached_is_not_converged() {
        let result =
            RelaxationResult::new(100, 0.5, Termination::IterationLimitReached, vec![0.5; 100]);
        assert!(!result.is_converged());
    }
}
