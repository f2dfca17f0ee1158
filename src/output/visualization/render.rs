//! Shared line-chart renderer
//!
//! Every chart of the crate is one or more `(time, value)` curves on a 2D
//! cartesian plane. This module validates the curves, picks the backend from
//! the output extension and draws them.
//!
//! | Extension | Backend         |
//! |-----------|-----------------|
//! | `.svg`    | `SVGBackend`    |
//! | other     | `BitMapBackend` |

use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;
use std::path::Path;

use super::config::PlotConfig;
use crate::error::{PhotolysisError, PhotolysisResult};

/// One labeled curve
#[derive(Debug, Clone, Copy)]
pub struct Curve<'a> {
    pub label: &'a str,
    pub time: &'a [f64],
    pub values: &'a [f64],
}

impl<'a> Curve<'a> {
    pub fn new(label: &'a str, time: &'a [f64], values: &'a [f64]) -> Self {
        Self {
            label,
            time,
            values,
        }
    }
}

/// Output format deduced from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ImageFormat::Svg,
            _ => ImageFormat::Png,
        }
    }
}

// =================================================================================================
// Validation
// =================================================================================================

/// Reject empty, length-mismatched or non-finite curves
pub(crate) fn validate_curves(curves: &[Curve<'_>]) -> PhotolysisResult<()> {
    if curves.is_empty() {
        return Err(PhotolysisError::EmptySeries("curve list".to_string()));
    }

    for curve in curves {
        if curve.time.is_empty() || curve.values.is_empty() {
            return Err(PhotolysisError::EmptySeries(format!(
                "curve '{}'",
                curve.label
            )));
        }
        if curve.time.len() != curve.values.len() {
            return Err(PhotolysisError::length_mismatch(
                "time points",
                curve.time.len(),
                format!("values in '{}'", curve.label),
                curve.values.len(),
            ));
        }
        if curve.time.iter().chain(curve.values).any(|v| !v.is_finite()) {
            return Err(PhotolysisError::NonFinite(format!("curve '{}'", curve.label)));
        }
    }

    Ok(())
}

// =================================================================================================
// Axis ranges
// =================================================================================================

fn bounds<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(*v), hi.max(*v))
    })
}

pub(crate) fn x_range(curves: &[Curve<'_>]) -> Range<f64> {
    let (lo, hi) = bounds(curves.iter().flat_map(|c| c.time.iter()));
    if hi > lo { lo..hi } else { lo..(lo + 1.0) }
}

pub(crate) fn y_range(curves: &[Curve<'_>], from_zero: bool) -> Range<f64> {
    let (mut lo, hi) = bounds(curves.iter().flat_map(|c| c.values.iter()));

    if from_zero {
        lo = lo.min(0.0);
        let top = (hi * 1.1).max(1e-10);
        return lo..top;
    }

    let span = hi - lo;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        (hi.abs() * 0.05).max(1e-10)
    };
    (lo - pad)..(hi + pad)
}

// =================================================================================================
// Rendering
// =================================================================================================

/// Draw `curves` into `output_path` with the backend matching its extension
///
/// Curves are validated before the file is created.
pub fn render_curves(
    curves: &[Curve<'_>],
    output_path: &Path,
    config: &PlotConfig,
) -> PhotolysisResult<()> {
    validate_curves(curves)?;

    let x = x_range(curves);
    let y = y_range(curves, config.y_from_zero);

    let outcome = match ImageFormat::from_path(output_path) {
        ImageFormat::Svg => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            render_impl(backend, curves, config, x, y)
        }
        ImageFormat::Png => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            render_impl(backend, curves, config, x, y)
        }
    };

    outcome.map_err(|e| PhotolysisError::Plot(e.to_string()))?;

    log::info!("chart written to {}", output_path.display());
    Ok(())
}

fn render_impl<DB: DrawingBackend>(
    backend: DB,
    curves: &[Curve<'_>],
    config: &PlotConfig,
    x: Range<f64>,
    y: Range<f64>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(90)
        .build_cartesian_2d(x, y)?;

    let y_precision = config.y_precision;
    let x_formatter = |x: &f64| format!("{:.0}", x);
    let y_formatter = |y: &f64| format!("{:.*}", y_precision, y);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter);
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    let single = curves.len() == 1;

    for (idx, curve) in curves.iter().enumerate() {
        let color = if single {
            config.line_color
        } else {
            config.get_series_color(idx)
        };

        chart
            .draw_series(LineSeries::new(
                curve.time.iter().zip(curve.values).map(|(t, v)| (*t, *v)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(curve.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
