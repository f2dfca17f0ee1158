//! Decay curve charts
//!
//! - [`plot_decay_curve`]      : the render stage of the demonstrator
//! - [`plot_decay_comparison`] : several decay curves on the same axes
//! - [`plot_results`]          : overlay of solver results (analytical vs RK4)
//!
//! # Usage
//!
//! ```rust,ignore
//! use photolysis_rs::models::{compute_decay_curve, DecayParameters};
//! use photolysis_rs::output::visualization::plot_decay_curve;
//!
//! let curve = compute_decay_curve(DecayParameters::default());
//! plot_decay_curve(&curve, "decay.png", None)?;
//! ```

use std::path::Path;

use super::config::{PlotConfig, NO_TITLE};
use super::render::{render_curves, Curve};
use crate::error::PhotolysisResult;
use crate::models::DecayCurve;
use crate::solver::SimulationResult;

/// Plot one decay curve: time on x, toluene concentration on y
///
/// # Arguments
///
/// * `curve`      : Output of [`compute_decay_curve`](crate::models::compute_decay_curve)
/// * `output_path`: `.svg` → vector, anything else → PNG
/// * `config`     : Optional plot configuration; `None` uses [`PlotConfig::decay_curve`]
///
/// # Errors
///
/// Returns `Err` if the backend cannot write to `output_path`.
pub fn plot_decay_curve(
    curve: &DecayCurve,
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> PhotolysisResult<()> {
    let default_config = PlotConfig::decay_curve(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let label = format!(
        "C0 = {}, k = {}",
        curve.parameters().initial_conc,
        curve.parameters().rate_constant
    );

    render_curves(
        &[Curve::new(
            &label,
            curve.time().as_slice(),
            curve.concentration().as_slice(),
        )],
        output_path.as_ref(),
        config,
    )
}

/// Overlay several labeled decay curves
///
/// # Example
///
/// ```rust,ignore
/// let slow = compute_decay_curve(DecayParameters::new(10.0, 0.001)?);
/// let fast = compute_decay_curve(DecayParameters::new(10.0, 1.0)?);
/// plot_decay_comparison(&[("k = 0.001", &slow), ("k = 1", &fast)], "sweep.svg", None)?;
/// ```
pub fn plot_decay_comparison(
    curves: &[(&str, &DecayCurve)],
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> PhotolysisResult<()> {
    let default_config = PlotConfig::decay_curve(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let series: Vec<Curve<'_>> = curves
        .iter()
        .map(|(label, curve)| {
            Curve::new(
                label,
                curve.time().as_slice(),
                curve.concentration().as_slice(),
            )
        })
        .collect();

    render_curves(&series, output_path.as_ref(), config)
}

/// Overlay solver results sharing the same quantity
pub fn plot_results(
    results: &[(&str, &SimulationResult)],
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> PhotolysisResult<()> {
    let default_config = PlotConfig::decay_curve(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let series: Vec<Curve<'_>> = results
        .iter()
        .map(|(label, result)| {
            Curve::new(
                label,
                result.time_points.as_slice(),
                result.values.as_slice(),
            )
        })
        .collect();

    render_curves(&series, output_path.as_ref(), config)
}

// =================================================================================================
// Tests
// =================================================================================================
