//! photolysis-rs: Toluene Photolysis Decay Simulator
//!
//! Two bounded controls drive a first-order decay curve
//! `C(t) = C0 · exp(-k · t)` sampled on 100 points over `[0, 100]`, rendered
//! as a "Photolysis Decay Curve" chart and optionally exported to CSV.
//!
//! # Architecture
//!
//! photolysis-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Physical models define the kinetics (what to compute)
//!    - Solvers evaluate them on a time grid (how to compute)
//!
//! 2. **Bounded inputs, pure compute**
//!    - Controls clamp every value into its range
//!    - Computing a curve from valid parameters cannot fail
//!
//! # Quick Start
//!
//! ```rust
//! use photolysis_rs::controls::{ControlId, ControlPanel};
//! use photolysis_rs::models::compute_decay_curve;
//!
//! # fn main() -> Result<(), photolysis_rs::error::PhotolysisError> {
//! // 1. Adjust the controls (out-of-range values are clamped)
//! let mut panel = ControlPanel::new();
//! panel.set(ControlId::RateConstant, 0.1)?;
//!
//! // 2. Compute the curve
//! let curve = compute_decay_curve(panel.parameters());
//!
//! // 3. Access results
//! assert_eq!(curve.len(), 100);
//! assert_eq!(curve.time()[99], 100.0);
//! assert_eq!(curve.concentration().first(), Some(10.0));
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`controls`]: Bounded numeric controls
//! - [`physics`]: Physical models (equations)
//! - [`models`]: First-order decay and the refractive-index lab model
//! - [`solver`]: Time grid and solvers (closed form, RK4 cross-check)
//! - [`analysis`]: Curve summaries and experiment comparison
//! - [`output`]: Chart rendering and CSV export
//! - [`app`]: The interactive demonstrator

// Core modules
pub mod error;
pub mod physics;

pub mod models;
pub mod solver;

pub mod analysis;
pub mod controls;

pub mod app;
pub mod output;

pub use error::{PhotolysisError, PhotolysisResult};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use photolysis_rs::prelude::*;
    //!
    //! let curve = compute_decay_curve(DecayParameters::default());
    //! assert_eq!(curve.len(), 100);
    //! ```
    pub use crate::controls::{ControlId, ControlPanel, RangeControl};
    pub use crate::error::{PhotolysisError, PhotolysisResult};
    pub use crate::models::{compute_decay_curve, DecayCurve, DecayParameters, FirstOrderDecay};
    pub use crate::output::{CsvConfig, PlotConfig};
    pub use crate::physics::{PhysicalModel, PhysicalQuantity, PhysicalSeries};
    pub use crate::solver::{
        AnalyticalSolver, RK4Solver, Scenario, SimulationResult, Solver, SolverConfiguration,
        SolverType, TimeGrid,
    };
}
