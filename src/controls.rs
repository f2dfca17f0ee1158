//! Bounded numeric controls
//!
//! The input stage of the demonstrator. Each control owns a closed range, a
//! default and a step. Setting a value clamps it into the range, so no
//! out-of-range number ever reaches the compute stage.
//!
//! ```text
//! user value ──► RangeControl::set ──► clamp(min, max) ──► DecayParameters
//! ```
//!
//! Two control sets exist:
//!
//! - [`ControlPanel`]: initial concentration and rate constant of the decay curve
//! - [`RefractiveControls`]: temperature, UV intensity, depth and irradiation
//!   mode of the refractive-index lab

use std::fmt;
use std::str::FromStr;

use crate::error::{PhotolysisError, PhotolysisResult};
use crate::models::{DecayParameters, IrradiationMode, LabConditions};

// =================================================================================================
// Control ranges
// =================================================================================================

/// `(min, max)` of the initial concentration control (ppm)
pub const INITIAL_CONC_RANGE: (f64, f64) = (1.0, 100.0);

pub const INITIAL_CONC_DEFAULT: f64 = 10.0;

/// `(min, max)` of the rate constant control
pub const RATE_CONSTANT_RANGE: (f64, f64) = (0.001, 1.0);

pub const RATE_CONSTANT_DEFAULT: f64 = 0.05;

/// Step of float sliders when no explicit step is given
pub const FLOAT_SLIDER_STEP: f64 = 0.01;

pub const INITIAL_CONC_LABEL: &str = "Initial Toluene Concentration (ppm)";
pub const RATE_CONSTANT_LABEL: &str = "Photolysis Rate Constant";

// =================================================================================================
// RangeControl
// =================================================================================================

/// A slider: label, closed range, default, step and current value
///
/// # Example
///
/// ```rust
/// use photolysis_rs::controls::RangeControl;
///
/// let mut c = RangeControl::new("Rate", 0.001, 1.0, 0.05, 0.01).unwrap();
/// assert_eq!(c.set(7.0).unwrap(), 1.0);
/// c.decrement();
/// assert!((c.value() - 0.99).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RangeControl {
    label: String,
    min: f64,
    max: f64,
    default: f64,
    step: f64,
    value: f64,
}

impl RangeControl {
    /// Create a control
    ///
    /// # Errors
    ///
    /// - non-finite bounds, default or step
    /// - `min > max`
    /// - `step <= 0`
    /// - default outside `[min, max]`
    pub fn new(
        label: impl Into<String>,
        min: f64,
        max: f64,
        default: f64,
        step: f64,
    ) -> PhotolysisResult<Self> {
        let label = label.into();

        if ![min, max, default, step].iter().all(|v| v.is_finite()) {
            return Err(PhotolysisError::invalid_parameter(
                &label,
                "bounds, default and step must be finite",
            ));
        }
        if min > max {
            return Err(PhotolysisError::invalid_parameter(
                &label,
                format!("min ({}) is greater than max ({})", min, max),
            ));
        }
        if step <= 0.0 {
            return Err(PhotolysisError::invalid_parameter(
                &label,
                format!("step must be positive, got {}", step),
            ));
        }
        if default < min || default > max {
            return Err(PhotolysisError::invalid_parameter(
                &label,
                format!("default {} is outside [{}, {}]", default, min, max),
            ));
        }

        Ok(Self {
            label,
            min,
            max,
            default,
            step,
            value: default,
        })
    }

    /// Initial concentration slider: [1, 100] ppm, default 10
    pub fn initial_conc() -> Self {
        Self::preset(
            INITIAL_CONC_LABEL,
            INITIAL_CONC_RANGE,
            INITIAL_CONC_DEFAULT,
            FLOAT_SLIDER_STEP,
        )
    }

    /// Rate constant slider: [0.001, 1], default 0.05
    pub fn rate_constant() -> Self {
        Self::preset(
            RATE_CONSTANT_LABEL,
            RATE_CONSTANT_RANGE,
            RATE_CONSTANT_DEFAULT,
            FLOAT_SLIDER_STEP,
        )
    }

    fn preset(label: &str, (min, max): (f64, f64), default: f64, step: f64) -> Self {
        Self {
            label: label.to_string(),
            min,
            max,
            default,
            step,
            value: default,
        }
    }

    // ======================================= accessors ==========================================

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn default_value(&self) -> f64 {
        self.default
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    // ======================================= mutation ===========================================

    /// Set the value, clamped into `[min, max]`, and return what was stored
    ///
    /// NaN and infinities are rejected and leave the control unchanged.
    pub fn set(&mut self, value: f64) -> PhotolysisResult<f64> {
        if !value.is_finite() {
            return Err(PhotolysisError::invalid_parameter(
                &self.label,
                format!("{} is not a finite number", value),
            ));
        }

        let clamped = value.clamp(self.min, self.max);
        if clamped != value {
            log::warn!(
                "{}: {} is outside [{}, {}], clamped to {}",
                self.label,
                value,
                self.min,
                self.max,
                clamped
            );
        }
        self.value = clamped;
        Ok(clamped)
    }

    /// Move one step up, saturating at `max`
    pub fn increment(&mut self) -> f64 {
        self.value = (self.value + self.step).min(self.max);
        self.value
    }

    /// Move one step down, saturating at `min`
    pub fn decrement(&mut self) -> f64 {
        self.value = (self.value - self.step).max(self.min);
        self.value
    }

    pub fn reset(&mut self) -> f64 {
        self.value = self.default;
        self.value
    }
}

impl fmt::Display for RangeControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}, {}]",
            self.label, self.value, self.min, self.max
        )
    }
}

// =================================================================================================
// Decay control panel
// =================================================================================================

/// Identifies one of the decay controls in commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    InitialConc,
    RateConstant,
}

impl FromStr for ControlId {
    type Err = PhotolysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c0" | "conc" | "initial_conc" => Ok(ControlId::InitialConc),
            "k" | "rate" | "rate_constant" => Ok(ControlId::RateConstant),
            other => Err(PhotolysisError::invalid_parameter(
                "control",
                format!("unknown control '{}', expected 'c0' or 'k'", other),
            )),
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlId::InitialConc => f.write_str("c0"),
            ControlId::RateConstant => f.write_str("k"),
        }
    }
}

/// The two sliders of the decay demonstrator
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPanel {
    initial_conc: RangeControl,
    rate_constant: RangeControl,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self {
            initial_conc: RangeControl::initial_conc(),
            rate_constant: RangeControl::rate_constant(),
        }
    }

    /// Panel with both values set (and clamped)
    pub fn with_values(initial_conc: f64, rate_constant: f64) -> PhotolysisResult<Self> {
        let mut panel = Self::new();
        panel.set(ControlId::InitialConc, initial_conc)?;
        panel.set(ControlId::RateConstant, rate_constant)?;
        Ok(panel)
    }

    pub fn control(&self, id: ControlId) -> &RangeControl {
        match id {
            ControlId::InitialConc => &self.initial_conc,
            ControlId::RateConstant => &self.rate_constant,
        }
    }

    pub fn control_mut(&mut self, id: ControlId) -> &mut RangeControl {
        match id {
            ControlId::InitialConc => &mut self.initial_conc,
            ControlId::RateConstant => &mut self.rate_constant,
        }
    }

    pub fn set(&mut self, id: ControlId, value: f64) -> PhotolysisResult<f64> {
        self.control_mut(id).set(value)
    }

    pub fn increment(&mut self, id: ControlId) -> f64 {
        self.control_mut(id).increment()
    }

    pub fn decrement(&mut self, id: ControlId) -> f64 {
        self.control_mut(id).decrement()
    }

    pub fn reset(&mut self) {
        self.initial_conc.reset();
        self.rate_constant.reset();
    }

    /// Current values as pipeline input
    ///
    /// Always within the control ranges.
    pub fn parameters(&self) -> DecayParameters {
        DecayParameters {
            initial_conc: self.initial_conc.value(),
            rate_constant: self.rate_constant.value(),
        }
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}

// =================================================================================================
// Refractive lab controls
// =================================================================================================

/// Sliders of the refractive-index lab
#[derive(Debug, Clone, PartialEq)]
pub struct RefractiveControls {
    pub temperature: RangeControl,
    pub uv_intensity: RangeControl,
    pub depth: RangeControl,
    pub mode: IrradiationMode,
}

impl RefractiveControls {
    pub fn new() -> Self {
        Self {
            temperature: RangeControl::preset("Temperature (°C)", (15.0, 30.0), 20.0, 1.0),
            uv_intensity: RangeControl::preset("UV Intensity (W/cm²)", (0.5, 2.0), 1.0, 0.1),
            depth: RangeControl::preset("Measurement Depth (mm)", (0.0, 5.0), 0.0, 0.5),
            mode: IrradiationMode::Top,
        }
    }

    /// Controls set from raw values (each clamped)
    pub fn with_values(
        temperature: f64,
        uv_intensity: f64,
        depth: f64,
        mode: IrradiationMode,
    ) -> PhotolysisResult<Self> {
        let mut controls = Self::new();
        controls.temperature.set(temperature)?;
        controls.uv_intensity.set(uv_intensity)?;
        controls.depth.set(depth)?;
        controls.mode = mode;
        Ok(controls)
    }

    pub fn conditions(&self) -> LabConditions {
        LabConditions {
            temperature: self.temperature.value(),
            uv_intensity: self.uv_intensity.value(),
            depth: self.depth.value(),
            mode: self.mode,
        }
    }
}

impl Default for RefractiveControls {
    fn default() -> Self {
        Self::new()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
