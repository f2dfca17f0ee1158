//! Simulation versus experiment
//!
//! Two interferometric experiments were recorded every 10 minutes for one
//! hour, at the surface and in depth of the cuvette:
//!
//! - **Experiment I**: top irradiation, abundant oxygen
//! - **Experiment II**: bottom irradiation, limited oxygen
//!
//! [`compare_with_experiment`] evaluates the matching logistic preset at each
//! recorded time and scores the deviation. Point errors are reported as
//! `|n_exp - n_sim| · 10⁴`, the scale used on the lab's comparison charts.

use crate::error::{PhotolysisError, PhotolysisResult};
use crate::models::{Experiment, LogisticRefractiveModel, MeasurementLocation};
use crate::physics::{PhysicalModel, PhysicalQuantity, PhysicalSeries};

/// Multiplier applied to absolute index differences
pub const ERROR_SCALE: f64 = 1.0e4;

// =================================================================================================
// Experimental data
// =================================================================================================

/// One recorded sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentalPoint {
    /// Minutes since the lamp was switched on
    pub time: f64,
    pub n_surface: f64,
    pub n_depth: f64,
}

impl ExperimentalPoint {
    pub fn at(&self, location: MeasurementLocation) -> f64 {
        match location {
            MeasurementLocation::Surface => self.n_surface,
            MeasurementLocation::Depth => self.n_depth,
        }
    }
}

const fn point(time: f64, n_surface: f64, n_depth: f64) -> ExperimentalPoint {
    ExperimentalPoint {
        time,
        n_surface,
        n_depth,
    }
}

const EXPERIMENT_I_DATA: [ExperimentalPoint; 7] = [
    point(0.0, 1.48788, 1.48786),
    point(10.0, 1.48752, 1.48750),
    point(20.0, 1.48705, 1.48703),
    point(30.0, 1.48640, 1.48638),
    point(40.0, 1.48625, 1.48623),
    point(50.0, 1.48618, 1.48616),
    point(60.0, 1.48616, 1.48614),
];

const EXPERIMENT_II_DATA: [ExperimentalPoint; 7] = [
    point(0.0, 1.48786, 1.48786),
    point(10.0, 1.48760, 1.48760),
    point(20.0, 1.48715, 1.48715),
    point(30.0, 1.48650, 1.48650),
    point(40.0, 1.48635, 1.48635),
    point(50.0, 1.48628, 1.48628),
    point(60.0, 1.48625, 1.48625),
];

/// Recorded refractive indices of one experiment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentalDataset {
    experiment: Experiment,
    points: &'static [ExperimentalPoint],
}

impl ExperimentalDataset {
    pub fn for_experiment(experiment: Experiment) -> Self {
        let points: &'static [ExperimentalPoint] = match experiment {
            Experiment::I => &EXPERIMENT_I_DATA,
            Experiment::II => &EXPERIMENT_II_DATA,
        };
        Self { experiment, points }
    }

    pub fn experiment(&self) -> Experiment {
        self.experiment
    }

    pub fn points(&self) -> &[ExperimentalPoint] {
        self.points
    }

    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.time).collect()
    }

    /// Recorded indices at `location`
    pub fn series(&self, location: MeasurementLocation) -> PhysicalSeries {
        PhysicalSeries::from_vec(
            PhysicalQuantity::RefractiveIndex,
            self.points.iter().map(|p| p.at(location)).collect(),
        )
    }
}

// =================================================================================================
// Metrics
// =================================================================================================

/// Summary of scaled point errors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorMetrics {
    pub average: f64,
    pub max: f64,
    pub rmse: f64,
}

impl ErrorMetrics {
    /// Metrics of already scaled, non-negative point errors
    ///
    /// # Errors
    ///
    /// Empty input.
    pub fn from_errors(errors: &[f64]) -> PhotolysisResult<Self> {
        if errors.is_empty() {
            return Err(PhotolysisError::EmptySeries("errors".to_string()));
        }
        let n = errors.len() as f64;
        let average = errors.iter().sum::<f64>() / n;
        let max = errors.iter().copied().fold(0.0, f64::max);
        let rmse = (errors.iter().map(|e| e * e).sum::<f64>() / n).sqrt();
        Ok(Self { average, max, rmse })
    }
}

/// Deviation at one recorded time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointDeviation {
    pub time: f64,
    pub experimental: f64,
    pub simulated: f64,
    /// `|experimental - simulated| · ERROR_SCALE`
    pub error: f64,
}

/// Point-by-point comparison of an experiment and its fitted preset
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentComparison {
    pub experiment: Experiment,
    pub location: MeasurementLocation,
    pub deviations: Vec<PointDeviation>,
    pub metrics: ErrorMetrics,
}

/// Score two series of the same length
///
/// # Errors
///
/// - empty series
/// - different lengths
/// - NaN or Inf in either series
pub fn compare_series(
    experimental: &PhysicalSeries,
    simulated: &PhysicalSeries,
) -> PhotolysisResult<ErrorMetrics> {
    if experimental.is_empty() {
        return Err(PhotolysisError::EmptySeries("experimental series".to_string()));
    }
    if experimental.len() != simulated.len() {
        return Err(PhotolysisError::length_mismatch(
            "experimental values",
            experimental.len(),
            "simulated values",
            simulated.len(),
        ));
    }
    if !experimental.is_finite() || !simulated.is_finite() {
        return Err(PhotolysisError::NonFinite("compared series".to_string()));
    }

    let errors: Vec<f64> = experimental
        .as_slice()
        .iter()
        .zip(simulated.as_slice())
        .map(|(e, s)| (e - s).abs() * ERROR_SCALE)
        .collect();

    ErrorMetrics::from_errors(&errors)
}

/// Compare the recorded data of `experiment` at `location` with its preset
pub fn compare_with_experiment(
    experiment: Experiment,
    location: MeasurementLocation,
) -> PhotolysisResult<ExperimentComparison> {
    let dataset = ExperimentalDataset::for_experiment(experiment);
    let model = LogisticRefractiveModel::preset(experiment, location);

    let deviations: Vec<PointDeviation> = dataset
        .points()
        .iter()
        .map(|p| {
            let experimental = p.at(location);
            let simulated = model.evaluate(p.time);
            PointDeviation {
                time: p.time,
                experimental,
                simulated,
                error: (experimental - simulated).abs() * ERROR_SCALE,
            }
        })
        .collect();

    let errors: Vec<f64> = deviations.iter().map(|d| d.error).collect();
    let metrics = ErrorMetrics::from_errors(&errors)?;

    log::debug!(
        "{} ({}): avg={:.3} max={:.3} rmse={:.3}",
        experiment,
        location,
        metrics.average,
        metrics.max,
        metrics.rmse
    );

    Ok(ExperimentComparison {
        experiment,
        location,
        deviations,
        metrics,
    })
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_datasets_shape() {
        for experiment in [Experiment::I, Experiment::II] {
            let data = ExperimentalDataset::for_experiment(experiment);
            assert_eq!(data.points().len(), 7);
            assert_eq!(data.times(), vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
            assert!(data.series(MeasurementLocation::Surface).is_non_increasing());
            assert!(data.series(MeasurementLocation::Depth).is_non_increasing());
        }
    }

    #[test]
    fn test_metrics_known_values() {
        let m = ErrorMetrics::from_errors(&[3.0, 4.0]).unwrap();
        assert_eq!(m.average, 3.5);
        assert_eq!(m.max, 4.0);
        assert_relative_eq!(m.rmse, (12.5f64).sqrt(), epsilon = 1e-12);
        assert!(ErrorMetrics::from_errors(&[]).is_err());
    }

    #[test]
    fn test_self_comparison_is_zero() {
        let data = ExperimentalDataset::for_experiment(Experiment::I);
        let s = data.series(MeasurementLocation::Surface);
        let m = compare_series(&s, &s).unwrap();
        assert_eq!(m.average, 0.0);
        assert_eq!(m.max, 0.0);
        assert_eq!(m.rmse, 0.0);
    }

    #[test]
    fn test_compare_series_validation() {
        let a = PhysicalSeries::from_vec(PhysicalQuantity::RefractiveIndex, vec![1.0, 2.0]);
        let b = PhysicalSeries::from_vec(PhysicalQuantity::RefractiveIndex, vec![1.0]);
        let empty = PhysicalSeries::from_vec(PhysicalQuantity::RefractiveIndex, vec![]);
        let nan = PhysicalSeries::from_vec(PhysicalQuantity::RefractiveIndex, vec![1.0, f64::NAN]);

        assert!(matches!(
            compare_series(&a, &b),
            Err(PhotolysisError::LengthMismatch { .. })
        ));
        assert!(matches!(
            compare_series(&empty, &empty),
            Err(PhotolysisError::EmptySeries(_))
        ));
        assert!(matches!(
            compare_series(&a, &nan),
            Err(PhotolysisError::NonFinite(_))
        ));
    }

    #[test]
    fn test_experiment_i_surface_fit() {
        let cmp = compare_with_experiment(Experiment::I, MeasurementLocation::Surface).unwrap();
        assert_eq!(cmp.deviations.len(), 7);

        // Preset starts on the first recorded value
        assert_eq!(cmp.deviations[0].error, 0.0);

        // The fit stays within a few 1e-4 of the recordings
        assert!(cmp.metrics.max < 10.0);
        assert!(cmp.metrics.average <= cmp.metrics.rmse);
        assert!(cmp.metrics.rmse <= cmp.metrics.max);
    }

    #[test]
    fn test_all_presets_compare() {
        for experiment in [Experiment::I, Experiment::II] {
            for location in [MeasurementLocation::Surface, MeasurementLocation::Depth] {
                let cmp = compare_with_experiment(experiment, location).unwrap();
                assert!(cmp.metrics.average.is_finite());
                assert_eq!(cmp.experiment, experiment);
                assert_eq!(cmp.location, location);
            }
        }
    }
}
