//! Curve analysis
//!
//! - [`CurveSummary`]: the handful of numbers printed after each pipeline pass
//! - [`comparison`]: scoring of the refractive-index presets against the
//!   recorded experiments

pub mod comparison;

pub use comparison::{
    compare_series, compare_with_experiment, ErrorMetrics, ExperimentComparison,
    ExperimentalDataset, ExperimentalPoint, PointDeviation, ERROR_SCALE,
};

use std::fmt;

use crate::error::{PhotolysisError, PhotolysisResult};
use crate::models::{DecayCurve, FirstOrderDecay};
use crate::physics::PhysicalSeries;

/// Key figures of a sampled curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSummary {
    pub initial: f64,
    pub final_value: f64,
    /// `final / initial`, `None` when the curve starts at zero
    pub fraction_remaining: Option<f64>,
    pub half_life: Option<f64>,
    pub monotonic: bool,
}

impl CurveSummary {
    /// Summary of any series
    ///
    /// # Errors
    ///
    /// Empty series.
    pub fn from_series(series: &PhysicalSeries, half_life: Option<f64>) -> PhotolysisResult<Self> {
        let (initial, final_value) = match (series.first(), series.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(PhotolysisError::EmptySeries(series.quantity().to_string())),
        };

        let fraction_remaining = if initial != 0.0 {
            Some(final_value / initial)
        } else {
            None
        };

        Ok(Self {
            initial,
            final_value,
            fraction_remaining,
            half_life,
            monotonic: series.is_non_increasing(),
        })
    }

    /// Summary of a decay curve, half-life included
    pub fn of_decay(curve: &DecayCurve) -> Self {
        let model = FirstOrderDecay::from_parameters(curve.parameters());
        let concentration = curve.concentration();
        let initial = concentration.first().unwrap_or(0.0);
        let final_value = concentration.last().unwrap_or(0.0);

        Self {
            initial,
            final_value,
            fraction_remaining: (initial != 0.0).then(|| final_value / initial),
            half_life: model.half_life(),
            monotonic: concentration.is_non_increasing(),
        }
    }
}

impl fmt::Display for CurveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "start {:.4}, end {:.4}", self.initial, self.final_value)?;
        if let Some(fraction) = self.fraction_remaining {
            write!(f, " ({:.2}% remaining)", fraction * 100.0)?;
        }
        if let Some(half_life) = self.half_life {
            write!(f, ", half-life {:.2}", half_life)?;
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{compute_decay_curve, DecayParameters};
    use crate::physics::PhysicalQuantity;
    use approx::assert_relative_eq;

    #[test]
    fn test_decay_summary() {
        let curve = compute_decay_curve(DecayParameters::default());
        let summary = CurveSummary::of_decay(&curve);

        assert_eq!(summary.initial, 10.0);
        assert_relative_eq!(summary.final_value, 0.0674, epsilon = 1e-4);
        assert_relative_eq!(summary.fraction_remaining.unwrap(), (-5.0f64).exp(), max_relative = 1e-12);
        assert_relative_eq!(summary.half_life.unwrap(), 2f64.ln() / 0.05, max_relative = 1e-12);
        assert!(summary.monotonic);
    }

    #[test]
    fn test_display() {
        let curve = compute_decay_curve(DecayParameters::default());
        let text = CurveSummary::of_decay(&curve).to_string();
        assert_eq!(text, "start 10.0000, end 0.0674 (0.67% remaining), half-life 13.86");
    }

    #[test]
    fn test_from_series() {
        let s = PhysicalSeries::from_vec(PhysicalQuantity::FringeShift, vec![0.0, 0.02, 0.05]);
        let summary = CurveSummary::from_series(&s, None).unwrap();
        assert_eq!(summary.fraction_remaining, None);
        assert!(!summary.monotonic);

        let empty = PhysicalSeries::from_vec(PhysicalQuantity::FringeShift, vec![]);
        assert!(CurveSummary::from_series(&empty, None).is_err());
    }
}
