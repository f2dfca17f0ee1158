//! First-order photolytic decay of toluene
//!
//! # Model
//!
//! Photolysis is modelled as a first-order loss:
//!
//! ```text
//! dC/dt = -k · C            C(0) = C0
//! C(t)  = C0 · exp(-k · t)
//! ```
//!
//! - `C0`: initial toluene concentration (ppm), control range [1, 100]
//! - `k` : photolysis rate constant, control range [0.001, 1]
//!
//! There is no actinic flux, quantum yield or secondary chemistry: only the
//! shape of the curve is physical.
//!
//! # Decay curve
//!
//! [`compute_decay_curve`] is the compute stage of the demonstrator. It is a
//! pure function of the two parameters and always returns 100 samples on the
//! standard grid ([`TimeGrid::standard`]).

use nalgebra::DVector;

use crate::controls::{INITIAL_CONC_RANGE, RATE_CONSTANT_RANGE};
use crate::error::{PhotolysisError, PhotolysisResult};
use crate::physics::{PhysicalModel, PhysicalQuantity, PhysicalSeries};
use crate::solver::TimeGrid;

// =================================================================================================
// Parameters
// =================================================================================================

/// The two inputs of the decay pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayParameters {
    /// Initial toluene concentration C0 (ppm)
    pub initial_conc: f64,

    /// Photolysis rate constant k
    pub rate_constant: f64,
}

impl DecayParameters {
    /// Create parameters, checking them against the control ranges
    ///
    /// Use [`crate::controls::ControlPanel`] instead when out-of-range values
    /// should be clamped rather than rejected.
    pub fn new(initial_conc: f64, rate_constant: f64) -> PhotolysisResult<Self> {
        check_range("initial_conc", initial_conc, INITIAL_CONC_RANGE)?;
        check_range("rate_constant", rate_constant, RATE_CONSTANT_RANGE)?;
        Ok(Self {
            initial_conc,
            rate_constant,
        })
    }
}

impl Default for DecayParameters {
    fn default() -> Self {
        Self {
            initial_conc: 10.0,
            rate_constant: 0.05,
        }
    }
}

fn check_range(name: &str, value: f64, (min, max): (f64, f64)) -> PhotolysisResult<()> {
    if !value.is_finite() {
        return Err(PhotolysisError::invalid_parameter(
            name,
            format!("{} is not finite", value),
        ));
    }
    if value < min || value > max {
        return Err(PhotolysisError::invalid_parameter(
            name,
            format!("{} is outside [{}, {}]", value, min, max),
        ));
    }
    Ok(())
}

// =================================================================================================
// Model
// =================================================================================================

/// First-order decay `C(t) = C0 · exp(-k · t)`
///
/// # Example
///
/// ```rust
/// use photolysis_rs::models::FirstOrderDecay;
/// use photolysis_rs::physics::PhysicalModel;
///
/// let model = FirstOrderDecay::new(10.0, 0.05).unwrap();
/// assert_eq!(model.evaluate(0.0), 10.0);
/// assert!((model.half_life().unwrap() - 13.862943611198906).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstOrderDecay {
    initial_conc: f64,
    rate_constant: f64,
}

impl FirstOrderDecay {
    /// Create a decay model
    ///
    /// Any finite, non-negative pair is accepted here; the narrower control
    /// ranges only apply to the interactive inputs.
    pub fn new(initial_conc: f64, rate_constant: f64) -> PhotolysisResult<Self> {
        if !initial_conc.is_finite() || initial_conc < 0.0 {
            return Err(PhotolysisError::invalid_parameter(
                "initial_conc",
                format!("{} must be finite and non-negative", initial_conc),
            ));
        }
        if !rate_constant.is_finite() || rate_constant < 0.0 {
            return Err(PhotolysisError::invalid_parameter(
                "rate_constant",
                format!("{} must be finite and non-negative", rate_constant),
            ));
        }
        Ok(Self {
            initial_conc,
            rate_constant,
        })
    }

    /// Build from already validated parameters
    pub fn from_parameters(parameters: DecayParameters) -> Self {
        Self {
            initial_conc: parameters.initial_conc,
            rate_constant: parameters.rate_constant,
        }
    }

    pub fn initial_conc(&self) -> f64 {
        self.initial_conc
    }

    pub fn rate_constant(&self) -> f64 {
        self.rate_constant
    }

    /// `ln 2 / k`, `None` when `k == 0`
    pub fn half_life(&self) -> Option<f64> {
        self.time_to_fraction(0.5)
    }

    /// Time at which `C(t) = fraction · C0`, i.e. `-ln(fraction) / k`
    ///
    /// `None` when `k == 0` or `fraction` is outside `(0, 1]`.
    pub fn time_to_fraction(&self, fraction: f64) -> Option<f64> {
        if self.rate_constant <= 0.0 || !(fraction > 0.0 && fraction <= 1.0) {
            return None;
        }
        Some(-fraction.ln() / self.rate_constant)
    }
}

impl PhysicalModel for FirstOrderDecay {
    fn quantity(&self) -> PhysicalQuantity {
        PhysicalQuantity::Concentration
    }

    fn initial_value(&self) -> f64 {
        self.initial_conc
    }

    fn evaluate(&self, time: f64) -> f64 {
        self.initial_conc * (-self.rate_constant * time).exp()
    }

    fn rate(&self, _time: f64, value: f64) -> f64 {
        -self.rate_constant * value
    }

    fn name(&self) -> &str {
        "First-Order Photolysis"
    }
}

// =================================================================================================
// Decay Curve
// =================================================================================================

/// Sampled decay curve: the output of the compute stage
#[derive(Debug, Clone, PartialEq)]
pub struct DecayCurve {
    parameters: DecayParameters,
    time: DVector<f64>,
    concentration: PhysicalSeries,
}

impl DecayCurve {
    pub fn parameters(&self) -> DecayParameters {
        self.parameters
    }

    pub fn time(&self) -> &DVector<f64> {
        &self.time
    }

    pub fn concentration(&self) -> &PhysicalSeries {
        &self.concentration
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// `(time, concentration)` at sample `index`
    pub fn sample(&self, index: usize) -> Option<(f64, f64)> {
        let t = self.time.get(index).copied()?;
        let c = self.concentration.get(index)?;
        Some((t, c))
    }
}

/// Compute the decay curve on the standard 100-point grid over `[0, 100]`
///
/// `concentration[i] = initial_conc · exp(-rate_constant · time[i])` with
/// `time[i] = i · (100 / 99)`.
///
/// # Example
///
/// ```rust
/// use photolysis_rs::models::{compute_decay_curve, DecayParameters};
///
/// let curve = compute_decay_curve(DecayParameters::default());
/// assert_eq!(curve.len(), 100);
/// assert_eq!(curve.sample(0), Some((0.0, 10.0)));
/// ```
pub fn compute_decay_curve(parameters: DecayParameters) -> DecayCurve {
    compute_decay_curve_on(parameters, &TimeGrid::standard())
}

/// Compute the decay curve on an arbitrary grid
pub fn compute_decay_curve_on(parameters: DecayParameters, grid: &TimeGrid) -> DecayCurve {
    let model = FirstOrderDecay::from_parameters(parameters);
    let time = grid.points();
    let concentration = time.map(|t| model.evaluate(t));

    log::debug!(
        "decay curve: C0={} k={} samples={}",
        parameters.initial_conc,
        parameters.rate_constant,
        time.len()
    );

    DecayCurve {
        parameters,
        time,
        concentration: PhysicalSeries::new(PhysicalQuantity::Concentration, concentration),
    }
}

// =================================================================================================
// Tests
// =================================================================================================
