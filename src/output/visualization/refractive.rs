//! Refractive-index lab charts

use std::path::Path;

use super::config::{PlotConfig, NO_TITLE};
use super::render::{render_curves, Curve};
use crate::error::PhotolysisResult;
use crate::models::RefractiveSeries;

/// Plot the refractive index over time
///
/// When the probe sits below the surface the depth-corrected index is drawn
/// as a second curve.
pub fn plot_refractive_index(
    series: &RefractiveSeries,
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> PhotolysisResult<()> {
    let default_config = PlotConfig::refractive_index(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let time = series.time();
    let index = series.refractive_index();
    let spatial = series.spatial_index();

    let mut curves = vec![Curve::new(
        "Refractive Index",
        time.as_slice(),
        index.as_slice(),
    )];
    if series.conditions().depth > 0.0 {
        curves.push(Curve::new(
            "Depth-Corrected Index",
            time.as_slice(),
            spatial.as_slice(),
        ));
    }

    render_curves(&curves, output_path.as_ref(), config)
}

/// Plot the temperature-scaled photolysis rate over time
pub fn plot_photolysis_rate(
    series: &RefractiveSeries,
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> PhotolysisResult<()> {
    let default_config = PlotConfig::photolysis_rate(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let time = series.time();
    let rate = series.photolysis_rate();

    render_curves(
        &[Curve::new("dn/dt", time.as_slice(), rate.as_slice())],
        output_path.as_ref(),
        config,
    )
}
