//! Physical models
//!
//! This module provides traits and types for physical models.
//! A physical model encapsulates the equations of one time-dependent
//! quantity (toluene concentration, refractive index, ...).
//!
//! # Core Concepts
//!
//! - **Physical Model**: closed form `y(t)` and right-hand side `dy/dt = f(t, y)`
//! - **Physical Series**: values of one quantity sampled on a time grid
//! - **Physical Quantity**: Type-safe identifier for physical variables
//!
//! # Architecture
//!
//! Physical models are **separate from numerical solvers**:
//! - The model provides the **equations** (physics)
//! - The solver provides the **method** to evaluate them on a grid (numerics)
//!
//! # Implementing a New Physical Model
//!
//! ```rust
//! use photolysis_rs::physics::{PhysicalModel, PhysicalQuantity};
//!
//! struct LinearLoss {
//!     start: f64,
//!     slope: f64,
//! }
//!
//! impl PhysicalModel for LinearLoss {
//!     fn quantity(&self) -> PhysicalQuantity { PhysicalQuantity::Concentration }
//!     fn initial_value(&self) -> f64 { self.start }
//!     fn evaluate(&self, time: f64) -> f64 { self.start - self.slope * time }
//!     fn rate(&self, _time: f64, _value: f64) -> f64 { -self.slope }
//!     fn name(&self) -> &str { "Linear Loss" }
//! }
//! ```
//!
//! # Available Models
//!
//! - **First-order decay** ([`crate::models::FirstOrderDecay`]): `C(t) = C0·exp(-k·t)`
//! - **Logistic refractive index** ([`crate::models::LogisticRefractiveModel`])

pub mod data;
pub mod traits;

pub use data::PhysicalSeries;
pub use traits::{PhysicalModel, PhysicalQuantity};
