//! Visualization module
//!
//! This module renders curves to image files using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **render**: Backend selection and the generic line-chart renderer
//! - **decay**: Toluene concentration charts
//! - **refractive**: Refractive-index lab charts
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use photolysis_rs::models::{compute_decay_curve, DecayParameters};
//! use photolysis_rs::output::visualization::{plot_decay_curve, PlotConfig};
//!
//! let curve = compute_decay_curve(DecayParameters::default());
//!
//! // Default chart: "Photolysis Decay Curve", Time vs Toluene Concentration
//! plot_decay_curve(&curve, "decay.png", None)?;
//!
//! // Custom title and size, SVG output
//! let config = PlotConfig::decay_curve("Toluene, k = 0.05").size(800, 600);
//! plot_decay_curve(&curve, "decay.svg", Some(&config))?;
//! ```
//!
//! # When to Use Which Function
//!
//! | Use Case | Function |
//! |----------|----------|
//! | One decay curve | `plot_decay_curve` |
//! | Several decay curves | `plot_decay_comparison` |
//! | Analytical vs RK4 | `plot_results` |
//! | Lab refractive index | `plot_refractive_index` |
//! | Lab photolysis rate | `plot_photolysis_rate` |

pub mod config;
pub mod decay;
pub mod refractive;
pub mod render;

pub use config::{IntoOptionalTitle, PlotConfig, DECAY_TITLE, DECAY_XLABEL, DECAY_YLABEL, NO_TITLE};
pub use decay::{plot_decay_comparison, plot_decay_curve, plot_results};
pub use refractive::{plot_photolysis_rate, plot_refractive_index};
pub use render::{render_curves, Curve, ImageFormat};
