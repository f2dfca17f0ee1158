//! Refractive-index signature of toluene photolysis (UV254 irradiation)
//!
//! Interferometric measurements follow the photolysis through the change of
//! refractive index of the irradiated liquid rather than through the
//! concentration itself. The index relaxes from `n_i` to `n_f` along a
//! logistic curve fitted on two experiments:
//!
//! ```text
//! n(t) = (n_i - n_f) / (1 + (t / t_half)^p) + n_f
//! ```
//!
//! | Experiment | Irradiation | Oxygen   | Location | n_i     | n_f     | t_half | p    |
//! |------------|-------------|----------|----------|---------|---------|--------|------|
//! | I          | top         | abundant | surface  | 1.48788 | 1.48616 | 16.13  | 1.98 |
//! | I          | top         | abundant | depth    | 1.48786 | 1.48633 | 15.41  | 2.14 |
//! | II         | bottom      | limited  | surface  | 1.48786 | 1.48619 | 26.52  | 2.15 |
//! | II         | bottom      | limited  | depth    | 1.48786 | 1.48621 | 26.82  | 2.18 |
//!
//! Derived observables:
//!
//! - fringe shift `Δm = (2·d / λ)·Δn` with `Δn = 1.48788 - n`
//! - photolysis rate `dn/dt = -k_base · I · m · n`, scaled by `1.05^(T - 20)`
//! - depth-corrected index `n_s - 0.3·(1.48788 - n_s)·depth / 10`
//!
//! Time is in minutes.

use nalgebra::DVector;
use std::fmt;
use std::str::FromStr;

use crate::error::{PhotolysisError, PhotolysisResult};
use crate::physics::{PhysicalModel, PhysicalQuantity, PhysicalSeries};

// =================================================================================================
// Constants
// =================================================================================================

/// He-Ne probe laser wavelength (nm)
pub const PROBE_WAVELENGTH: f64 = 632.8;

/// UV source wavelength (nm)
pub const UV_WAVELENGTH: f64 = 254.0;

/// Refractive index before irradiation
pub const INITIAL_REFRACTIVE_INDEX: f64 = 1.48788;

/// Refractive index after complete photolysis
pub const FINAL_REFRACTIVE_INDEX: f64 = 1.48616;

/// Cuvette depth (mm)
pub const CUVETTE_DEPTH: f64 = 10.0;

/// Cuvette optical path (mm)
pub const CUVETTE_PATH: f64 = 10.0;

/// Photolysis rate near the irradiated surface (min⁻¹)
pub const PHOTOLYSIS_RATE_SURFACE: f64 = 2.5e-5;

/// Photolysis rate below [`DEEP_THRESHOLD`] (min⁻¹)
pub const PHOTOLYSIS_RATE_DEPTH: f64 = 1.5e-5;

/// Depth (mm) beyond which the depth presets apply
pub const DEEP_THRESHOLD: f64 = 2.5;

/// Largest number of samples a lab run may hold
pub const MAX_SAMPLES: usize = 1_000_000;

const TOP_MODE_MULTIPLIER: f64 = 1.2;
const REFERENCE_TEMPERATURE: f64 = 20.0;
const TEMPERATURE_COEFFICIENT: f64 = 1.05;
const SPATIAL_GRADIENT_FACTOR: f64 = 0.3;

// =================================================================================================
// Experimental conditions
// =================================================================================================

/// Side of the cuvette the UV lamp irradiates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IrradiationMode {
    /// From above, oxygen-rich surface (Experiment I)
    #[default]
    Top,
    /// From below, limited oxygen (Experiment II)
    Bottom,
}

impl IrradiationMode {
    fn multiplier(self) -> f64 {
        match self {
            IrradiationMode::Top => TOP_MODE_MULTIPLIER,
            IrradiationMode::Bottom => 1.0,
        }
    }
}

impl fmt::Display for IrradiationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrradiationMode::Top => f.write_str("top"),
            IrradiationMode::Bottom => f.write_str("bottom"),
        }
    }
}

impl FromStr for IrradiationMode {
    type Err = PhotolysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(IrradiationMode::Top),
            "bottom" => Ok(IrradiationMode::Bottom),
            other => Err(PhotolysisError::invalid_parameter(
                "mode",
                format!("expected 'top' or 'bottom', got '{}'", other),
            )),
        }
    }
}

/// Fitted experiment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experiment {
    /// Top irradiation, oxygen present
    I,
    /// Bottom irradiation, limited oxygen
    II,
}

impl Experiment {
    pub fn mode(self) -> IrradiationMode {
        match self {
            Experiment::I => IrradiationMode::Top,
            Experiment::II => IrradiationMode::Bottom,
        }
    }

    pub fn from_mode(mode: IrradiationMode) -> Self {
        match mode {
            IrradiationMode::Top => Experiment::I,
            IrradiationMode::Bottom => Experiment::II,
        }
    }
}

impl fmt::Display for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Experiment::I => f.write_str("Experiment I"),
            Experiment::II => f.write_str("Experiment II"),
        }
    }
}

impl FromStr for Experiment {
    type Err = PhotolysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "i" | "1" => Ok(Experiment::I),
            "ii" | "2" => Ok(Experiment::II),
            other => Err(PhotolysisError::invalid_parameter(
                "experiment",
                format!("expected 'i' or 'ii', got '{}'", other),
            )),
        }
    }
}

/// Where the probe beam crosses the cuvette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasurementLocation {
    #[default]
    Surface,
    Depth,
}

impl MeasurementLocation {
    /// Location class of a probe depth (mm)
    pub fn from_depth(depth: f64) -> Self {
        if depth > DEEP_THRESHOLD {
            MeasurementLocation::Depth
        } else {
            MeasurementLocation::Surface
        }
    }
}

impl fmt::Display for MeasurementLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementLocation::Surface => f.write_str("surface"),
            MeasurementLocation::Depth => f.write_str("depth"),
        }
    }
}

impl FromStr for MeasurementLocation {
    type Err = PhotolysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "surface" => Ok(MeasurementLocation::Surface),
            "depth" => Ok(MeasurementLocation::Depth),
            other => Err(PhotolysisError::invalid_parameter(
                "location",
                format!("expected 'surface' or 'depth', got '{}'", other),
            )),
        }
    }
}

/// Conditions of one lab run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabConditions {
    /// Liquid temperature (°C)
    pub temperature: f64,

    /// UV intensity (W/cm²), 1.0 is the reference lamp
    pub uv_intensity: f64,

    /// Probe depth below the surface (mm)
    pub depth: f64,

    pub mode: IrradiationMode,
}

impl Default for LabConditions {
    fn default() -> Self {
        Self {
            temperature: 20.0,
            uv_intensity: 1.0,
            depth: 0.0,
            mode: IrradiationMode::Top,
        }
    }
}

// =================================================================================================
// Logistic fit
// =================================================================================================

/// Parameters of the logistic refractive-index curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticParameters {
    pub n_initial: f64,
    pub n_final: f64,
    /// Time (min) at which half of the index change has happened
    pub t_half: f64,
    /// Steepness exponent
    pub p: f64,
}

impl LogisticParameters {
    pub const EXPERIMENT_I_SURFACE: Self = Self {
        n_initial: 1.48788,
        n_final: 1.48616,
        t_half: 16.13,
        p: 1.98,
    };

    pub const EXPERIMENT_I_DEPTH: Self = Self {
        n_initial: 1.48786,
        n_final: 1.48633,
        t_half: 15.41,
        p: 2.14,
    };

    pub const EXPERIMENT_II_SURFACE: Self = Self {
        n_initial: 1.48786,
        n_final: 1.48619,
        t_half: 26.52,
        p: 2.15,
    };

    pub const EXPERIMENT_II_DEPTH: Self = Self {
        n_initial: 1.48786,
        n_final: 1.48621,
        t_half: 26.82,
        p: 2.18,
    };

    /// Fitted preset for an experiment and a probe location
    pub fn preset(experiment: Experiment, location: MeasurementLocation) -> Self {
        match (experiment, location) {
            (Experiment::I, MeasurementLocation::Surface) => Self::EXPERIMENT_I_SURFACE,
            (Experiment::I, MeasurementLocation::Depth) => Self::EXPERIMENT_I_DEPTH,
            (Experiment::II, MeasurementLocation::Surface) => Self::EXPERIMENT_II_SURFACE,
            (Experiment::II, MeasurementLocation::Depth) => Self::EXPERIMENT_II_DEPTH,
        }
    }

    /// Preset matching an irradiation mode and probe depth (mm)
    pub fn for_conditions(mode: IrradiationMode, depth: f64) -> Self {
        Self::preset(
            Experiment::from_mode(mode),
            MeasurementLocation::from_depth(depth),
        )
    }

    /// `n(t)`
    pub fn refractive_index(&self, time: f64) -> f64 {
        let numerator = self.n_initial - self.n_final;
        let denominator = 1.0 + (time / self.t_half).powf(self.p);
        numerator / denominator + self.n_final
    }

    /// `dn/dt` of the logistic curve
    pub fn derivative(&self, time: f64) -> f64 {
        if time <= 0.0 {
            return 0.0;
        }
        let x = time / self.t_half;
        let x_p = x.powf(self.p);
        -(self.n_initial - self.n_final) * self.p * x.powf(self.p - 1.0)
            / (self.t_half * (1.0 + x_p).powi(2))
    }
}

/// Logistic refractive-index model
///
/// # Example
///
/// ```rust
/// use photolysis_rs::models::{LogisticRefractiveModel, Experiment, MeasurementLocation};
/// use photolysis_rs::physics::PhysicalModel;
///
/// let model = LogisticRefractiveModel::preset(Experiment::I, MeasurementLocation::Surface);
/// assert_eq!(model.evaluate(0.0), 1.48788);
/// assert!(model.evaluate(60.0) < model.evaluate(30.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRefractiveModel {
    parameters: LogisticParameters,
    name: String,
}

impl LogisticRefractiveModel {
    pub fn new(parameters: LogisticParameters) -> Self {
        Self {
            parameters,
            name: "Logistic Refractive Index".to_string(),
        }
    }

    pub fn preset(experiment: Experiment, location: MeasurementLocation) -> Self {
        Self {
            parameters: LogisticParameters::preset(experiment, location),
            name: format!("Logistic Refractive Index ({}, {})", experiment, location),
        }
    }

    pub fn parameters(&self) -> &LogisticParameters {
        &self.parameters
    }
}

impl PhysicalModel for LogisticRefractiveModel {
    fn quantity(&self) -> PhysicalQuantity {
        PhysicalQuantity::RefractiveIndex
    }

    fn initial_value(&self) -> f64 {
        self.parameters.n_initial
    }

    fn evaluate(&self, time: f64) -> f64 {
        self.parameters.refractive_index(time)
    }

    fn rate(&self, time: f64, _value: f64) -> f64 {
        self.parameters.derivative(time)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// =================================================================================================
// Derived observables
// =================================================================================================

/// Fringe shift `Δm = (2·path / λ)·Δn` for an index change `Δn`
pub fn fringe_shift(refractive_index_change: f64, cuvette_path: f64) -> f64 {
    (2.0 * cuvette_path / PROBE_WAVELENGTH) * refractive_index_change
}

/// Fringe shift accumulated since irradiation started, for index `n`
pub fn fringe_shift_at(refractive_index: f64) -> f64 {
    fringe_shift(INITIAL_REFRACTIVE_INDEX - refractive_index, CUVETTE_PATH)
}

/// Photolysis rate `dn/dt = -k_base · I · m · n` at the reference temperature
pub fn photolysis_rate(
    refractive_index: f64,
    uv_intensity: f64,
    depth: f64,
    mode: IrradiationMode,
) -> f64 {
    let base_rate = match MeasurementLocation::from_depth(depth) {
        MeasurementLocation::Depth => PHOTOLYSIS_RATE_DEPTH,
        MeasurementLocation::Surface => PHOTOLYSIS_RATE_SURFACE,
    };
    -base_rate * uv_intensity * mode.multiplier() * refractive_index
}

/// Arrhenius-like scaling: +5 % per °C above 20 °C
pub fn temperature_effect(temperature: f64, base_rate: f64) -> f64 {
    base_rate * TEMPERATURE_COEFFICIENT.powf(temperature - REFERENCE_TEMPERATURE)
}

/// Index at `depth` (mm) given the surface index, linear gradient over `total_depth`
pub fn spatial_variation(surface_index: f64, depth: f64, total_depth: f64) -> f64 {
    let gradient = (INITIAL_REFRACTIVE_INDEX - surface_index) * SPATIAL_GRADIENT_FACTOR;
    surface_index - gradient * (depth / total_depth)
}

// =================================================================================================
// Time series
// =================================================================================================

/// One time sample of a lab run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefractiveSample {
    pub time: f64,
    pub refractive_index: f64,
    pub photolysis_rate: f64,
    pub fringe_shift: f64,
    /// Index corrected for the probe depth
    pub spatial_index: f64,
}

/// Sampled lab run: refractive index, photolysis rate and fringe shift over time
#[derive(Debug, Clone, PartialEq)]
pub struct RefractiveSeries {
    conditions: LabConditions,
    parameters: LogisticParameters,
    samples: Vec<RefractiveSample>,
}

impl RefractiveSeries {
    /// Sample `t = 0, step, 2·step, …` up to and including `duration` (min)
    ///
    /// # Errors
    ///
    /// - `time_step` not strictly positive or not finite
    /// - `duration` negative or not finite
    /// - more than [`MAX_SAMPLES`] samples requested
    pub fn generate(
        duration: f64,
        time_step: f64,
        conditions: LabConditions,
    ) -> PhotolysisResult<Self> {
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(PhotolysisError::invalid_parameter(
                "time_step",
                format!("{} must be finite and positive", time_step),
            ));
        }
        if !duration.is_finite() || duration < 0.0 {
            return Err(PhotolysisError::invalid_parameter(
                "duration",
                format!("{} must be finite and non-negative", duration),
            ));
        }

        let parameters = LogisticParameters::for_conditions(conditions.mode, conditions.depth);

        // Small tolerance so that duration/step = 60.0 / 1.0 keeps its last sample
        let ratio = (duration / time_step + 1e-9).floor();
        if !ratio.is_finite() || ratio >= MAX_SAMPLES as f64 {
            return Err(PhotolysisError::invalid_parameter(
                "time_step",
                format!(
                    "{} min over {} min exceeds {} samples",
                    time_step, duration, MAX_SAMPLES
                ),
            ));
        }
        let steps = ratio as usize;

        let samples = (0..=steps)
            .map(|i| {
                let time = i as f64 * time_step;
                let refractive_index = parameters.refractive_index(time);
                let rate = photolysis_rate(
                    refractive_index,
                    conditions.uv_intensity,
                    conditions.depth,
                    conditions.mode,
                );
                RefractiveSample {
                    time,
                    refractive_index,
                    photolysis_rate: temperature_effect(conditions.temperature, rate),
                    fringe_shift: fringe_shift_at(refractive_index),
                    spatial_index: spatial_variation(
                        refractive_index,
                        conditions.depth,
                        CUVETTE_DEPTH,
                    ),
                }
            })
            .collect::<Vec<_>>();

        log::debug!(
            "refractive series: mode={} depth={} samples={}",
            conditions.mode,
            conditions.depth,
            samples.len()
        );

        Ok(Self {
            conditions,
            parameters,
            samples,
        })
    }

    pub fn conditions(&self) -> &LabConditions {
        &self.conditions
    }

    pub fn parameters(&self) -> &LogisticParameters {
        &self.parameters
    }

    pub fn samples(&self) -> &[RefractiveSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn time(&self) -> DVector<f64> {
        DVector::from_iterator(self.len(), self.samples.iter().map(|s| s.time))
    }

    pub fn refractive_index(&self) -> PhysicalSeries {
        self.column(PhysicalQuantity::RefractiveIndex, |s| s.refractive_index)
    }

    pub fn photolysis_rate(&self) -> PhysicalSeries {
        self.column(PhysicalQuantity::PhotolysisRate, |s| s.photolysis_rate)
    }

    pub fn fringe_shift(&self) -> PhysicalSeries {
        self.column(PhysicalQuantity::FringeShift, |s| s.fringe_shift)
    }

    pub fn spatial_index(&self) -> PhysicalSeries {
        self.column(PhysicalQuantity::Custom("Depth-Corrected Index"), |s| {
            s.spatial_index
        })
    }

    fn column<F>(&self, quantity: PhysicalQuantity, f: F) -> PhysicalSeries
    where
        F: Fn(&RefractiveSample) -> f64,
    {
        PhysicalSeries::new(
            quantity,
            DVector::from_iterator(self.len(), self.samples.iter().map(f)),
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
