//! Integration tests for grid + solver behaviour
//!
//! Covers the contract every solver shares: fixed cells never drift, the
//! converged field is a fixed point of one more sweep, smoothing toward a
//! constant boundary never overshoots, and the worked 5x5 example
//! terminates where it should.

use relax_rs::field::RelaxationGrid;
use relax_rs::problems;
use relax_rs::solver::{
    GaussSeidelSolver, JacobiSolver, RelaxationSolver, SolverConfiguration, SorSolver,
};

mod common;
use common::{assert_fixed_cells_hold, max_interior_error, seeded_laplace_grid, seeded_rng};

#[test]
fn test_worked_example_five_by_five() {
    // The reference scenario: 5x5, perimeter fixed to 10.0, interior
    // seeded to 0.0, Gauss-Seidel with tolerance 1e-6. Must converge and
    // leave every interior cell within 1e-6 of 10.0.

    let mut grid = RelaxationGrid::new(5, 5).unwrap();
    grid.fix_border(10.0);
    grid.seed_uniform(0.0);

    let config = SolverConfiguration::new(1e-6, 1, 10_000);
    let result = GaussSeidelSolver::new().solve(&mut grid, &config).unwrap();

    assert!(result.is_converged());
    assert!(result.iterations < 10_000);
    assert!(max_interior_error(&grid, 10.0) < 1e-6);
}

#[test]
fn test_fixed_cells_are_invariant_under_every_solver() {
    // The Dirichlet contract is exact equality, not closeness: a fixed
    // cell is assigned, never averaged.

    let config = SolverConfiguration::new(1e-8, 1, 20_000);

    let solvers: Vec<Box<dyn RelaxationSolver>> = vec![
        Box::new(JacobiSolver::new()),
        Box::new(GaussSeidelSolver::new()),
        Box::new(SorSolver::new(1.6)),
    ];

    for solver in solvers {
        let mut grid = problems::hot_edge(11, 14, 100.0, -20.0).unwrap();
        let mut rng = seeded_rng(3);
        grid.seed_interior(-20.0, 100.0, &mut rng).unwrap();

        let result = solver.solve(&mut grid, &config).unwrap();

        assert!(result.is_converged(), "{} did not converge", solver.name());
        assert_fixed_cells_hold(&grid);
    }
}

#[test]
fn test_converged_field_is_a_fixed_point() {
    // Once a run reports convergence, one additional sweep moves no free
    // cell by more than the tolerance.

    let tolerance = 1e-8;
    let config = SolverConfiguration::new(tolerance, 1, 50_000);

    let solvers: Vec<Box<dyn RelaxationSolver>> = vec![
        Box::new(JacobiSolver::new()),
        Box::new(GaussSeidelSolver::new()),
        Box::new(SorSolver::new(1.3)),
    ];

    for solver in solvers {
        let mut grid = seeded_laplace_grid(9, 5.0, 21);
        let first = solver.solve(&mut grid, &config).unwrap();
        assert!(first.is_converged(), "{} did not converge", solver.name());

        // Exactly one more sweep over the already-converged field
        let one_sweep = SolverConfiguration::new(tolerance, 0, 1);
        let second = solver.solve(&mut grid, &one_sweep).unwrap();

        assert!(
            second.final_max_delta <= tolerance,
            "{} moved {} after convergence",
            solver.name(),
            second.final_max_delta
        );
    }
}

#[test]
fn test_smoothing_toward_constant_boundary_is_monotone() {
    // A field seeded below a constant boundary must rise toward it sweep
    // by sweep and never overshoot past it (no overcorrection at
    // omega = 1). Checked cell by cell by running one sweep at a time.

    let boundary = 10.0;
    let one_sweep = SolverConfiguration::new(1e-12, 0, 1);

    let solvers: Vec<Box<dyn RelaxationSolver>> = vec![
        Box::new(JacobiSolver::new()),
        Box::new(GaussSeidelSolver::new()),
    ];

    for solver in solvers {
        let mut grid = problems::uniform_box(7, boundary).unwrap();
        grid.seed_uniform(0.0);

        for sweep in 0..60 {
            let before = grid.clone();
            solver.solve(&mut grid, &one_sweep).unwrap();

            for i in 1..6 {
                for j in 1..6 {
                    let old = before.value(i, j);
                    let new = grid.value(i, j);

                    assert!(
                        new >= old - 1e-12,
                        "{} sweep {}: cell ({}, {}) moved away from the boundary ({} -> {})",
                        solver.name(),
                        sweep,
                        i,
                        j,
                        old,
                        new
                    );
                    assert!(
                        new <= boundary + 1e-12,
                        "{} sweep {}: cell ({}, {}) overshot the boundary ({})",
                        solver.name(),
                        sweep,
                        i,
                        j,
                        new
                    );
                }
            }
        }
    }
}

#[test]
fn test_reseeding_and_resolving_reproduces_the_run() {
    // There is no retry semantics: a caller that wants another attempt
    // re-seeds and re-invokes. With the same seed, the whole run repeats.

    let config = SolverConfiguration::new(1e-6, 1, 10_000);

    let mut first = seeded_laplace_grid(10, 10.0, 99);
    let first_result = GaussSeidelSolver::new().solve(&mut first, &config).unwrap();

    let mut second = seeded_laplace_grid(10, 10.0, 99);
    let second_result = GaussSeidelSolver::new().solve(&mut second, &config).unwrap();

    assert_eq!(first_result.iterations, second_result.iterations);
    assert_eq!(first.max_abs_difference(&second), 0.0);
    assert_eq!(first_result.delta_history, second_result.delta_history);
}

#[test]
fn test_solver_reports_error_without_touching_a_malformed_grid() {
    // Validation failures happen before the first sweep: the field is
    // exactly as the caller left it.

    let mut grid = RelaxationGrid::new(6, 6).unwrap();
    // Only two edges fixed: the other two leave free cells on the border
    for k in 0..6 {
        grid.set_boundary(0, k, 1.0).unwrap();
        grid.set_boundary(5, k, 1.0).unwrap();
    }
    grid.seed_uniform(0.25);
    let before = grid.clone();

    let result = GaussSeidelSolver::new().solve(&mut grid, &SolverConfiguration::default());

    assert!(result.is_err());
    assert_eq!(grid.max_abs_difference(&before), 0.0);
}
