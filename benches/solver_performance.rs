//! Performance benchmarks for the relaxation solvers
//!
//! This benchmark compares Jacobi, Gauss-Seidel, and SOR on identical
//! Laplace problems to measure their relative cost.
//!
//! # What We're Measuring
//!
//! Each measurement is a full `solve` to the same tolerance on the same
//! starting field, so the numbers fold together two effects:
//!
//! 1. **Cost per sweep** — nearly identical for all three methods (four
//!    adds and a multiply per free cell)
//! 2. **Sweep count** — where the methods differ: SOR at a good factor
//!    needs an order of magnitude fewer sweeps than Jacobi
//!
//! # Expected Results
//!
//! On an n x n grid, sweep counts scale as O(n²) for Jacobi and
//! Gauss-Seidel (Gauss-Seidel with roughly half the constant) and O(n)
//! for SOR at the near-optimal factor, so the gap widens with grid size.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all solver benchmarks
//! cargo bench --bench solver_performance
//!
//! # Run a single method
//! cargo bench --bench solver_performance Jacobi
//! ```

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::hint::black_box;

use relax_rs::field::RelaxationGrid;
use relax_rs::problems;
use relax_rs::solver::{
    GaussSeidelSolver, JacobiSolver, RelaxationSolver, SolverConfiguration, SorSolver,
};

// =================================================================================================
// Benchmark Setup
// =================================================================================================

/// The shared test problem: uniform box seeded from a fixed random seed
///
/// Seeding happens here, once per benchmark, so criterion measures only
/// the solve.
fn benchmark_grid(size: usize) -> RelaxationGrid {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    let mut grid = problems::uniform_box(size, 10.0).unwrap();
    let mut rng = SmallRng::seed_from_u64(42);
    grid.seed_interior(0.0, 10.0, &mut rng).unwrap();
    grid
}

/// Near-optimal SOR factor for an n x n Laplace problem
fn optimal_omega(size: usize) -> f64 {
    2.0 / (1.0 + (std::f64::consts::PI / (size as f64 - 1.0)).sin())
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Benchmark one solver across grid sizes
///
/// The grid is cloned inside `iter_batched` so every measured run starts
/// from the same unsolved field; solving a converged grid would be a
/// no-op after the first iteration.
fn bench_solver<S: RelaxationSolver>(
    c: &mut Criterion,
    group_name: &str,
    make_solver: impl Fn(usize) -> S,
) {
    let mut group = c.benchmark_group(group_name);
    let config = SolverConfiguration::new(1e-6, 1, 100_000);

    for size in [16, 32, 64].iter() {
        let grid = benchmark_grid(*size);
        let solver = make_solver(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter_batched(
                || grid.clone(),
                |mut fresh| {
                    solver
                        .solve(black_box(&mut fresh), black_box(&config))
                        .unwrap()
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_jacobi_solver(c: &mut Criterion) {
    bench_solver(c, "Jacobi Solver", |_| JacobiSolver::new());
}

fn benchmark_gauss_seidel_solver(c: &mut Criterion) {
    bench_solver(c, "Gauss-Seidel Solver", |_| GaussSeidelSolver::new());
}

fn benchmark_sor_solver(c: &mut Criterion) {
    bench_solver(c, "SOR Solver", |size| SorSolver::new(optimal_omega(size)));
}

/// Single-sweep cost comparison, isolated from convergence behaviour
///
/// Runs every method for exactly one sweep on a 64 x 64 field. The three
/// should be within a few percent of each other; a larger gap points at
/// an implementation inefficiency rather than a property of the methods.
fn benchmark_single_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single Sweep");
    let one_sweep = SolverConfiguration::new(1e-12, 0, 1);
    let grid = benchmark_grid(64);

    let solvers: Vec<(&str, Box<dyn RelaxationSolver>)> = vec![
        ("Jacobi", Box::new(JacobiSolver::new())),
        ("Gauss-Seidel", Box::new(GaussSeidelSolver::new())),
        ("SOR", Box::new(SorSolver::new(1.5))),
    ];

    for (name, solver) in solvers {
        group.bench_function(name, |b| {
            b.iter_batched(
                || grid.clone(),
                |mut fresh| {
                    solver
                        .solve(black_box(&mut fresh), black_box(&one_sweep))
                        .unwrap()
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_jacobi_solver,
    benchmark_gauss_seidel_solver,
    benchmark_sor_solver,
    benchmark_single_sweep,
);
criterion_main!(benches);
