//! Output module for pipeline results
//!
//! - **Visualization**: PNG/SVG charts using plotters (the render stage)
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Charts
//! │   ├── config.rs
//! │   ├── render.rs
//! │   ├── decay.rs
//! │   └── refractive.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use photolysis_rs::models::{compute_decay_curve, DecayParameters};
//! use photolysis_rs::output::{export_decay_curve_csv, plot_decay_curve};
//!
//! let curve = compute_decay_curve(DecayParameters::default());
//! plot_decay_curve(&curve, "decay.png", None)?;
//! export_decay_curve_csv(&curve, "decay.csv", None)?;
//! ```

pub mod export;
pub mod visualization;

pub use visualization::{
    plot_decay_comparison, plot_decay_curve, plot_photolysis_rate, plot_refractive_index,
    plot_results, PlotConfig,
};

pub use export::{
    export_decay_curve_csv, export_refractive_series_csv, export_series_csv, CsvConfig,
    CsvExporter, CsvMetadata, Exporter,
};
