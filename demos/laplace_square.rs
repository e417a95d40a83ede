//! Heated Plate: the 2-D Laplace Boundary-Value Problem
//!
//! One edge of a rectangular plate is held at 100, the other three at 0.
//! The steady-state temperature field solves the Laplace equation; this
//! demo relaxes it with all three methods, compares their sweep counts,
//! and renders the Gauss-Seidel run.
//!
//! Run with:
//!
//! ```bash
//! cargo run --example laplace_square
//! ```

use relax_rs::output::export::{export_convergence_csv, export_field_csv, CsvConfig, CsvMetadata};
use relax_rs::output::visualization::{plot_convergence, plot_field, PlotConfig};
use relax_rs::problems;
use relax_rs::solver::{
    GaussSeidelSolver, JacobiSolver, RelaxationSolver, SolverConfiguration, SorSolver,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Heated Plate: Laplace Boundary-Value Problem ===\n");

    // Problem parameters
    let rows = 40;
    let cols = 60;
    let hot = 100.0;
    let cold = 0.0;

    // Convergence policy
    let tolerance = 1e-6;
    let config = SolverConfiguration::new(tolerance, 1, 100_000);

    println!("Problem:");
    println!("  Plate: {} x {} cells", rows, cols);
    println!("  Top edge: {} / other edges: {}", hot, cold);
    println!("\nConvergence:");
    println!("  Tolerance: {:e}", tolerance);
    println!("  Iteration cap: {}\n", config.max_iterations);

    // The same starting field for every method
    let seed_grid = problems::hot_edge(rows, cols, hot, cold)?;

    // Solve with all three methods
    let solvers: Vec<(Box<dyn RelaxationSolver>, &str)> = vec![
        (Box::new(JacobiSolver::new()), "Jacobi"),
        (Box::new(GaussSeidelSolver::new()), "Gauss-Seidel"),
        (Box::new(SorSolver::new(1.85)), "SOR (omega 1.85)"),
    ];

    println!("{:<18} {:>8} {:>14}", "Method", "Sweeps", "Final delta");
    println!("{}", "-".repeat(42));

    let mut gauss_seidel_run = None;

    for (solver, label) in solvers {
        let mut grid = seed_grid.clone();

        let start = std::time::Instant::now();
        let result = solver.solve(&mut grid, &config)?;
        let elapsed = start.elapsed();

        println!(
            "{:<18} {:>8} {:>14.3e}   ({:.1} ms, {})",
            label,
            result.iterations,
            result.final_max_delta,
            elapsed.as_secs_f64() * 1e3,
            result.termination,
        );

        if label == "Gauss-Seidel" {
            gauss_seidel_run = Some((grid, result));
        }
    }

    // Render the Gauss-Seidel run
    let (grid, result) = gauss_seidel_run.expect("Gauss-Seidel run missing");
    let out_dir = std::env::temp_dir();

    println!("\nGenerating output in {} ...", out_dir.display());

    let mut field_config = PlotConfig::default();
    field_config.title = "Heated plate, steady state".to_string();
    let field_png = out_dir.join("heated_plate.png");
    plot_field(&grid, field_png.to_str().unwrap(), Some(&field_config))?;
    println!("  heated_plate.png");

    let convergence_config = PlotConfig::convergence("Gauss-Seidel convergence");
    let convergence_png = out_dir.join("heated_plate_convergence.png");
    plot_convergence(
        &result.delta_history,
        convergence_png.to_str().unwrap(),
        Some(&convergence_config),
    )?;
    println!("  heated_plate_convergence.png");

    let mut csv_config = CsvConfig::default();
    csv_config.include_metadata = true;
    csv_config.metadata = Some(CsvMetadata {
        solver_name: Some("Gauss-Seidel".to_string()),
        tolerance: Some(tolerance),
        iterations: Some(result.iterations),
        comment: Some(format!("Heated plate {} x {}", rows, cols)),
    });

    let field_csv = out_dir.join("heated_plate.csv");
    export_field_csv(&grid, field_csv.to_str().unwrap(), Some(&csv_config))?;
    println!("  heated_plate.csv");

    let convergence_csv = out_dir.join("heated_plate_convergence.csv");
    export_convergence_csv(
        &result.delta_history,
        convergence_csv.to_str().unwrap(),
        Some(&csv_config),
    )?;
    println!("  heated_plate_convergence.csv");

    println!("\n=== Done ===");
    println!("Expected: smooth level curves fanning out from the hot edge;");
    println!("the SOR row above should show the method ordering SOR < GS <= Jacobi.");

    Ok(())
}
