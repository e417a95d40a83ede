//! Output module for relaxation results
//!
//! This module provides tools to output relaxed fields and convergence
//! data in various formats:
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   └── field_plots.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use relax_rs::output::visualization::{plot_field, plot_convergence};
//!
//! // Heatmap of the relaxed field
//! plot_field(&grid, "field.png", None)?;
//!
//! // Per-sweep convergence curve
//! plot_convergence(&result.delta_history, "convergence.png", None)?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use relax_rs::output::export::{export_field_csv, export_convergence_csv};
//!
//! export_field_csv(&grid, "field.csv", None)?;
//! export_convergence_csv(&result.delta_history, "convergence.csv", None)?;
//! ```
//!
//! # Design Philosophy
//!
//! The output module separates concerns:
//! - **Visualization**: for human interpretation (heatmaps, curves)
//! - **Export**: for programmatic analysis (CSV)
//!
//! The solver core has no dependency in this direction: output consumes
//! grid snapshots and delta histories, never the other way around.

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{plot_convergence, plot_field, PlotConfig};

pub use export::{export_convergence_csv, export_field_csv, CsvConfig, CsvMetadata};
