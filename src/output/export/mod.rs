//! Export module for simulation results.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a
//! new format means a new file and no change to the existing ones.
//!
//! # Available formats
//!
//! | Format  | Module    |
//! |---------|-----------|
//! | CSV     | [`csv`]   |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use photolysis_rs::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//!
//! // Full export (all samples)
//! exporter.export_single(&result, None, Path::new("decay.csv"))?;
//!
//! // Downsampled export to 20 rows
//! exporter.export_single(&result, Some(20), Path::new("decay_light.csv"))?;
//!
//! // Analytical and RK4 side by side
//! exporter.export_multi(&[("Analytical", &exact), ("RK4", &rk4)], None, Path::new("check.csv"))?;
//! ```

pub mod csv;

pub use csv::{
    export_decay_curve_csv, export_refractive_series_csv, export_series_csv, CsvConfig,
    CsvExporter, CsvMetadata,
};

use std::path::Path;

use crate::solver::SimulationResult;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type.
///
/// # Parameter `n_points`
///
/// - `None`: exports every sample
/// - `Some(n)`: uniformly downsamples to `n` rows, always keeping the
///   **first and last** samples
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports one result: a time column and a value column.
    ///
    /// # Errors
    ///
    /// - the path is invalid or the directory does not exist
    /// - `result` contains no data
    fn export_single(
        &self,
        result: &SimulationResult,
        n_points: Option<usize>,
        path: &Path,
    ) -> Result<(), Self::Error>;

    /// Exports several labeled results sharing the time axis of the first one.
    ///
    /// # Errors
    ///
    /// - `results` is empty or the lengths differ
    /// - the path is invalid
    fn export_multi(
        &self,
        results: &[(&str, &SimulationResult)],
        n_points: Option<usize>,
        path: &Path,
    ) -> Result<(), Self::Error>;
}
