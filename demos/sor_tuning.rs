//! SOR Factor Tuning
//!
//! Sweeps the relaxation factor over (1, 2) on a fixed Laplace problem and
//! tabulates the sweep count for each value, next to the closed-form
//! optimum for a square grid:
//!
//! ```text
//! omega* = 2 / (1 + sin(pi / (n - 1)))
//! ```
//!
//! Run with:
//!
//! ```bash
//! cargo run --example sor_tuning
//! ```

use rand::rngs::SmallRng;
use rand::SeedableRng;
use relax_rs::problems;
use relax_rs::solver::{RelaxationSolver, SolverConfiguration, SorSolver};
use std::error::Error;

const SIZE: usize = 32;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== SOR Factor Tuning on a {0} x {0} Laplace Problem ===\n", SIZE);

    // The shared starting field: fixed seed so every factor sees the same
    // problem
    let mut seed_grid = problems::uniform_box(SIZE, 10.0)?;
    let mut rng = SmallRng::seed_from_u64(42);
    seed_grid.seed_interior(0.0, 10.0, &mut rng)?;

    let config = SolverConfiguration::new(1e-6, 1, 50_000);

    println!("{:>8} {:>10} {:>14}", "omega", "sweeps", "final delta");
    println!("{}", "-".repeat(34));

    let mut best: Option<(f64, usize)> = None;

    for step in 0..19 {
        let omega = 1.0 + 0.05 * step as f64;

        let mut grid = seed_grid.clone();
        let result = SorSolver::new(omega).solve(&mut grid, &config)?;

        println!(
            "{:>8.2} {:>10} {:>14.3e}",
            omega, result.iterations, result.final_max_delta
        );

        let improved = match best {
            Some((_, count)) => result.iterations < count,
            None => true,
        };
        if result.is_converged() && improved {
            best = Some((omega, result.iterations));
        }
    }

    let theoretical = 2.0 / (1.0 + (std::f64::consts::PI / (SIZE as f64 - 1.0)).sin());

    println!();
    if let Some((omega, count)) = best {
        println!("Best measured factor: {:.2} ({} sweeps)", omega, count);
    }
    println!("Closed-form optimum:  {:.4}", theoretical);
    println!("\nExpected: a valley in the sweep counts with its floor near the");
    println!("closed-form optimum, rising steeply as omega approaches 2.");

    Ok(())
}
