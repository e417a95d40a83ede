//! Static plot generation for relaxation results
//!
//! This module uses the `plotters` library to generate static images
//! (PNG, SVG) showing relaxed fields and convergence behaviour.
//!
//! # Features
//!
//! - **Field heatmaps**: one colored cell per grid cell, blue (cold) to
//!   red (hot), normalized to the field's own range
//! - **Convergence curves**: per-sweep maximum delta on a log axis, the
//!   standard way to read off a relaxation method's linear convergence
//!   rate (a straight line on this plot)
//! - **Customizable**: [`PlotConfig`] for titles, labels, sizes
//! - **PNG and SVG**: chosen from the output file extension
//!
//! # Example
//!
//! ```rust,ignore
//! use relax_rs::output::visualization::{plot_convergence, plot_field, PlotConfig};
//!
//! // Solve, then render both views of the run
//! let result = solver.solve(&mut grid, &config)?;
//!
//! plot_field(&grid, "field.png", None)?;
//!
//! let mut plot_config = PlotConfig::default();
//! plot_config.title = "Gauss-Seidel convergence".to_string();
//! plot_convergence(&result.delta_history, "convergence.png", Some(&plot_config))?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use crate::field::RelaxationGrid;

// =================================================================================================
// Configuration
// =================================================================================================

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: dimensions in pixels
/// - `title`: plot title
/// - `xlabel`, `ylabel`: axis labels
/// - `line_color`: curve color for convergence plots
/// - `background`: background color
/// - `line_width`: curve thickness in pixels
///
/// # Example
///
/// ```rust
/// use relax_rs::output::visualization::PlotConfig;
///
/// let mut config = PlotConfig::default();
/// config.title = "Heated plate".to_string();
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Relaxed Field")
    pub title: String,

    /// X-axis label (default: "Column")
    pub xlabel: String,

    /// Y-axis label (default: "Row")
    pub ylabel: String,

    /// Curve color for convergence plots (default: BLUE)
    pub line_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Curve thickness in pixels (default: 2)
    pub line_width: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Relaxed Field".to_string(),
            xlabel: "Column".to_string(),
            ylabel: "Row".to_string(),
            line_color: BLUE,
            background: WHITE,
            line_width: 2,
        }
    }
}

impl PlotConfig {
    /// Create config with axes labeled for a convergence curve
    pub fn convergence(title: &str) -> Self {
        Self {
            title: title.to_string(),
            xlabel: "Sweep".to_string(),
            ylabel: "Max |change|".to_string(),
            ..Default::default()
        }
    }
}

// =================================================================================================
// Color Mapping
// =================================================================================================

/// Map a normalized value in [0, 1] to a blue-to-red heat color
///
/// Values outside [0, 1] are clamped.
fn heat_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    RGBColor(
        (255.0 * t) as u8,
        (96.0 * (1.0 - (2.0 * t - 1.0).abs())) as u8,
        (255.0 * (1.0 - t)) as u8,
    )
}

// =================================================================================================
// Drawing Helpers - Generic over Backend
// =================================================================================================

/// Helper function to draw a field heatmap on any drawing area
fn draw_field_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    grid: &RelaxationGrid,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let (rows, cols) = grid.shape();

    // Normalize colors to the field's own range; a flat field maps to the
    // cold end rather than dividing by zero.
    let min = grid.values().iter().cloned().fold(f64::INFINITY, f64::min);
    let max = grid
        .values()
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    let span = if max > min { max - min } else { 1.0 };

    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0..cols as i32, 0..rows as i32)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(config.xlabel.as_str())
        .y_desc(config.ylabel.as_str())
        .draw()?;

    // One rectangle per cell
    chart.draw_series((0..rows).flat_map(|i| {
        (0..cols).map(move |j| {
            let t = (grid.value(i, j) - min) / span;
            Rectangle::new(
                [
                    (j as i32, i as i32),
                    (j as i32 + 1, i as i32 + 1),
                ],
                heat_color(t).filled(),
            )
        })
    }))?;

    root.present()?;
    Ok(())
}

/// Helper function to draw a convergence curve on any drawing area
fn draw_convergence_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    delta_history: &[f64],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    // A converged run ends with deltas near (or at) zero; clamp so the log
    // axis stays defined.
    let clamped: Vec<f64> = delta_history.iter().map(|d| d.max(1e-16)).collect();

    let y_min = clamped.iter().cloned().fold(f64::INFINITY, f64::min) / 10.0;
    let y_max = clamped.iter().cloned().fold(f64::NEG_INFINITY, f64::max) * 10.0;
    let x_max = (clamped.len() as f64).max(2.0);

    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(1.0..x_max, (y_min..y_max).log_scale())?;

    chart
        .configure_mesh()
        .x_desc(config.xlabel.as_str())
        .y_desc(config.ylabel.as_str())
        .draw()?;

    chart.draw_series(LineSeries::new(
        clamped
            .iter()
            .enumerate()
            .map(|(sweep, delta)| ((sweep + 1) as f64, *delta)),
        config.line_color.stroke_width(config.line_width),
    ))?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Main Plotting Functions
// =================================================================================================

/// Render a grid snapshot as a color-mapped heatmap
///
/// # Arguments
///
/// * `grid` - Field to render (typically after solving)
/// * `output_path` - Output file path (.png or .svg)
/// * `config` - Optional [`PlotConfig`]
///
/// # Example
///
/// ```rust,ignore
/// plot_field(&grid, "heated_plate.png", None)?;
/// ```
///
/// # Errors
///
/// Returns error if the file cannot be written or plotting fails.
pub fn plot_field(
    grid: &RelaxationGrid,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let owned_config = config.cloned().unwrap_or_default();
    let config = &owned_config;

    if output_path.ends_with(".svg") {
        let root = SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_field_on_area(&root, grid, config)
    } else {
        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_field_on_area(&root, grid, config)
    }
}

/// Render a per-sweep delta history as a log-scale convergence curve
///
/// # Arguments
///
/// * `delta_history` - One maximum-delta entry per sweep, in order
///   (as carried by
///   [`RelaxationResult::delta_history`](crate::solver::RelaxationResult))
/// * `output_path` - Output file path (.png or .svg)
/// * `config` - Optional [`PlotConfig`]
///
/// # Example
///
/// ```rust,ignore
/// let result = solver.solve(&mut grid, &config)?;
/// plot_convergence(&result.delta_history, "convergence.png", None)?;
/// ```
///
/// # Errors
///
/// Returns error if the file cannot be written or plotting fails.
pub fn plot_convergence(
    delta_history: &[f64],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    assert!(
        !delta_history.is_empty(),
        "Convergence history must not be empty"
    );

    let owned_config = config.cloned().unwrap_or_else(|| PlotConfig::convergence("Convergence"));
    let config = &owned_config;

    if output_path.ends_with(".svg") {
        let root = SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_convergence_on_area(&root, delta_history, config)
    } else {
        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_convergence_on_area(&root, delta_history, config)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
