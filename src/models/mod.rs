//! Physical models of toluene photolysis
//!
//! All models implement the [`PhysicalModel`](crate::physics::PhysicalModel) trait:
//! a closed form `y(t)` plus the right-hand side `dy/dt = f(t, y)` that the
//! numerical solvers integrate.
//!
//! # Available Models
//!
//! ## [`FirstOrderDecay`]: toluene concentration
//!
//! `C(t) = C0 · exp(-k · t)`. This is the model behind the decay demonstrator;
//! [`compute_decay_curve`] samples it on the standard 100-point grid.
//!
//! ## [`LogisticRefractiveModel`]: refractive index under UV254
//!
//! Logistic relaxation of the refractive index fitted on two experiments
//! (top irradiation with oxygen, bottom irradiation with limited oxygen), at
//! the surface and in depth. [`RefractiveSeries`] adds the derived fringe
//! shift and photolysis rate for given [`LabConditions`].

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod first_order;
pub mod refractive;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use first_order::{
    compute_decay_curve, compute_decay_curve_on, DecayCurve, DecayParameters, FirstOrderDecay,
};
pub use refractive::{
    Experiment, IrradiationMode, LabConditions, LogisticParameters, LogisticRefractiveModel,
    MeasurementLocation, RefractiveSample, RefractiveSeries,
};
