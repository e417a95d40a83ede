//! CSV export functionality for relaxation results
//!
//! This module provides tools to export field snapshots and convergence
//! histories to CSV (Comma-Separated Values) format.
//!
//! # Features
//!
//! - **Simple interface**: export straight from the grid and the result
//! - **Metadata support**: optional `#`-prefixed header with run parameters
//! - **Customizable**: delimiter and precision options
//!
//! # Quick Examples
//!
//! ## Field Snapshot
//!
//! ```rust,ignore
//! use relax_rs::output::export::export_field_csv;
//!
//! export_field_csv(&grid, "field.csv", None)?;
//! ```
//!
//! **Output** (`field.csv`), one grid row per line:
//! ```csv
//! 10.000000,10.000000,10.000000
//! 10.000000,9.999999,10.000000
//! 10.000000,10.000000,10.000000
//! ```
//!
//! ## Convergence History with Metadata
//!
//! ```rust,ignore
//! use relax_rs::output::export::{export_convergence_csv, CsvConfig, CsvMetadata};
//!
//! let metadata = CsvMetadata {
//!     solver_name: Some("Gauss-Seidel".to_string()),
//!     tolerance: Some(1e-6),
//!     iterations: Some(result.iterations),
//!     ..Default::default()
//! };
//!
//! let mut config = CsvConfig::default();
//! config.include_metadata = true;
//! config.metadata = Some(metadata);
//!
//! export_convergence_csv(&result.delta_history, "convergence.csv", Some(&config))?;
//! ```
//!
//! **Output** (`convergence.csv`):
//! ```csv
//! # Relaxation Run Data
//! # Solver: Gauss-Seidel
//! # Tolerance: 0.000001
//! # Iterations: 62
//! #
//! Sweep,MaxDelta
//! 1,2.500000
//! 2,1.250000
//! ...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::field::RelaxationGrid;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Fields
///
/// - `delimiter`: column separator (default: ',')
/// - `precision`: number of decimal places (default: 6)
/// - `include_metadata`: add header comments with run info
/// - `metadata`: run metadata to include
///
/// # Example
///
/// ```rust
/// use relax_rs::output::export::CsvConfig;
///
/// let config = CsvConfig::default().delimiter(';').precision(12);
/// assert_eq!(config.precision, 12);
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in the header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Create config with high precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

/// Run metadata written as `#`-prefixed comment lines
///
/// Every field is optional; only the populated ones are written.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Name of the solver that produced the data
    pub solver_name: Option<String>,

    /// Convergence tolerance of the run
    pub tolerance: Option<f64>,

    /// Sweeps actually run
    pub iterations: Option<usize>,

    /// Free-form comment
    pub comment: Option<String>,
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a field snapshot: one grid row per CSV line
///
/// # Arguments
///
/// * `grid` - Field to export (typically after solving)
/// * `output_path` - Output file path
/// * `config` - Optional [`CsvConfig`]
///
/// # Errors
///
/// Returns error if the file cannot be created or written.
pub fn export_field_csv(
    grid: &RelaxationGrid,
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    let owned_config = config.cloned().unwrap_or_default();
    let config = &owned_config;

    let mut file = File::create(output_path)?;
    write_metadata_header(&mut file, config, "Field Snapshot")?;

    let delimiter = config.delimiter.to_string();
    let (rows, cols) = grid.shape();

    for i in 0..rows {
        let line: Vec<String> = (0..cols)
            .map(|j| format!("{:.*}", config.precision, grid.value(i, j)))
            .collect();
        writeln!(file, "{}", line.join(&delimiter))?;
    }

    Ok(())
}

/// Export a convergence history: one sweep per CSV line
///
/// # Arguments
///
/// * `delta_history` - One maximum-delta entry per sweep, in order
/// * `output_path` - Output file path
/// * `config` - Optional [`CsvConfig`]
///
/// # Errors
///
/// Returns error if the history is empty or the file cannot be written.
pub fn export_convergence_csv(
    delta_history: &[f64],
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    if delta_history.is_empty() {
        return Err("Convergence history is empty".into());
    }

    let owned_config = config.cloned().unwrap_or_default();
    let config = &owned_config;

    let mut file = File::create(output_path)?;
    write_metadata_header(&mut file, config, "Relaxation Run Data")?;

    writeln!(file, "Sweep{}MaxDelta", config.delimiter)?;
    for (sweep, delta) in delta_history.iter().enumerate() {
        writeln!(
            file,
            "{}{}{:.*}",
            sweep + 1,
            config.delimiter,
            config.precision,
            delta
        )?;
    }

    Ok(())
}

/// Write the optional `#`-prefixed metadata block
fn write_metadata_header(
    file: &mut File,
    config: &CsvConfig,
    title: &str,
) -> Result<(), Box<dyn Error>> {
    if !config.include_metadata {
        return Ok(());
    }

    writeln!(file, "# {}", title)?;

    if let Some(metadata) = &config.metadata {
        if let Some(solver) = &metadata.solver_name {
            writeln!(file, "# Solver: {}", solver)?;
        }
        if let Some(tolerance) = metadata.tolerance {
            writeln!(file, "# Tolerance: {}", tolerance)?;
        }
        if let Some(iterations) = metadata.iterations {
            writeln!(file, "# Iterations: {}", iterations)?;
        }
        if let Some(comment) = &metadata.comment {
            writeln!(file, "# {}", comment)?;
        }
    }

    writeln!(file, "#")?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
