//! Data export for relaxation results
//!
//! CSV output compatible with Excel, Python pandas, MATLAB, and most data
//! analysis tools:
//!
//! - [`export_field_csv`]: one grid row per CSV line
//! - [`export_convergence_csv`]: one sweep per CSV line
//!
//! Both accept an optional [`CsvConfig`] for delimiter, precision, and a
//! metadata comment header.

pub mod csv;

pub use csv::{export_convergence_csv, export_field_csv, CsvConfig, CsvMetadata};
