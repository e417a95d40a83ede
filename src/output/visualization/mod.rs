//! Visualization of relaxed fields and convergence histories
//!
//! Static image generation built on the `plotters` library. Two plot
//! types cover the domain:
//!
//! - [`plot_field`]: color-mapped heatmap of a grid snapshot
//! - [`plot_convergence`]: per-sweep maximum-delta curve on a log scale
//!
//! Both pick PNG or SVG from the output file extension and accept an
//! optional [`PlotConfig`] for titles, labels, and sizes.

pub mod field_plots;

pub use field_plots::{plot_convergence, plot_field, PlotConfig};
