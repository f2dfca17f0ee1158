//! Physical models traits and types
//!
//! This module defines the core API for physical models:
//! - `PhysicalModel`: trait for all physical models
//! - `PhysicalQuantity`: type-safe quantity identifiers

use std::fmt;

// =================================================================================================
// Physical quantities (Type-safe Identifiers)
// =================================================================================================

/// Known physical quantities (type-safe enum)
///
/// Every series produced by a model or a solver is tagged with the quantity
/// it carries, so that plots and exports can pick headers and units without
/// string matching.
///
/// # Example
/// ```
/// use photolysis_rs::physics::PhysicalQuantity;
///
/// let q = PhysicalQuantity::Concentration;
/// assert_eq!(q.unit(), Some("ppm"));
/// assert_eq!(q.to_string(), "Concentration");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalQuantity {
    /// Toluene concentration (ppm)
    Concentration,

    /// Refractive index of the irradiated liquid (dimensionless)
    RefractiveIndex,

    /// Photolysis rate dn/dt (min⁻¹)
    PhotolysisRate,

    /// Interferometric fringe shift (fringes)
    FringeShift,

    /// Custom quantity (for use extension)
    Custom(&'static str),
}

impl PhysicalQuantity {
    /// Human readable name
    pub fn label(&self) -> &'static str {
        match self {
            PhysicalQuantity::Concentration => "Concentration",
            PhysicalQuantity::RefractiveIndex => "Refractive Index",
            PhysicalQuantity::PhotolysisRate => "Photolysis Rate",
            PhysicalQuantity::FringeShift => "Fringe Shift",
            PhysicalQuantity::Custom(name) => name,
        }
    }

    /// Unit symbol, `None` for dimensionless quantities
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            PhysicalQuantity::Concentration => Some("ppm"),
            PhysicalQuantity::PhotolysisRate => Some("1/min"),
            PhysicalQuantity::FringeShift => Some("fringes"),
            PhysicalQuantity::RefractiveIndex | PhysicalQuantity::Custom(_) => None,
        }
    }

    /// Label with unit suffix, e.g. `Concentration (ppm)`
    pub fn header(&self) -> String {
        match self.unit() {
            Some(unit) => format!("{} ({})", self.label(), unit),
            None => self.label().to_string(),
        }
    }
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ==================================================================================================
// Physical Model Trait
// =================================================================================================

/// Trait for physical models
///
/// # Responsibility
///
/// A model describes one time-dependent quantity `y(t)` in two equivalent
/// ways:
///
/// - a closed form `y(t)` via [`evaluate`](PhysicalModel::evaluate), used by
///   the analytical solver
/// - a right-hand side `dy/dt = f(t, y)` via [`rate`](PhysicalModel::rate),
///   used by time integrators such as RK4
///
/// The model provides the "physics" (equations), the solver provides
/// the "numerics" (method to evaluate them on a grid).
pub trait PhysicalModel: Send + Sync {
    /// Quantity carried by `y`
    fn quantity(&self) -> PhysicalQuantity;

    /// Value at `t = 0`
    fn initial_value(&self) -> f64;

    /// Closed-form value at `time`
    fn evaluate(&self, time: f64) -> f64;

    /// Right-hand side of `dy/dt = f(t, y)`
    fn rate(&self, time: f64, value: f64) -> f64;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }
}

// =================================================================================================
// Tests
// =================================================================================================
