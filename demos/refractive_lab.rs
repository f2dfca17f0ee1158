//! Example: Refractive-Index Lab - Experiments I and II
//!
//! Runs the logistic refractive-index model for both irradiation modes,
//! at the surface and below it, and scores each preset against the
//! recorded interferometry data.
//!
//! **Apparatus**:
//! - He-Ne probe at 632.8 nm
//! - Low-pressure mercury lamp at 254 nm
//! - 10 mm cuvette
//!
//! **Model**:
//! - n(t) = (n_i - n_f) / (1 + (t / t_half)^p) + n_f

use photolysis_rs::{
    analysis::compare_with_experiment,
    controls::RefractiveControls,
    models::{Experiment, IrradiationMode, MeasurementLocation, RefractiveSeries},
    output::{export_refractive_series_csv, plot_photolysis_rate, plot_refractive_index},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  Refractive-Index Lab - Toluene Photolysis");
    println!("═══════════════════════════════════════════════════════\n");

    let tmp_dir = std::env::temp_dir();

    // ====== Simulation configuration ======

    let duration = 60.0;    // minutes
    let time_step = 0.5;    // minutes

    println!("Simulation:");
    println!("  Duration  : {} min", duration);
    println!("  Time step : {} min\n", time_step);

    // =============================================================================================
    // Lab runs: 2 modes × 2 depths
    // =============================================================================================

    println!("{:<8} {:>10} {:>14} {:>14} {:>12}",
             "Mode", "Depth (mm)", "n(60)", "dn/dt(60)", "Fringes");
    println!("{:-<62}", "");

    for mode in [IrradiationMode::Top, IrradiationMode::Bottom] {
        for depth in [0.0, 4.0] {
            let controls = RefractiveControls::with_values(20.0, 1.0, depth, mode)?;
            let series = RefractiveSeries::generate(duration, time_step, controls.conditions())?;

            if let Some(last) = series.samples().last() {
                println!("{:<8} {:>10.1} {:>14.6} {:>14.3e} {:>12.4}",
                         mode.to_string(), depth, last.refractive_index, last.photolysis_rate, last.fringe_shift);
            }

            let stem = format!("lab_{}_{}mm", mode, depth);
            plot_refractive_index(&series, tmp_dir.join(format!("{}_index.png", stem)), None)?;
            plot_photolysis_rate(&series, tmp_dir.join(format!("{}_rate.png", stem)), None)?;
            export_refractive_series_csv(&series, tmp_dir.join(format!("{}.csv", stem)), None)?;
        }
    }

    println!("\n  Charts and CSV files written to {}", tmp_dir.display());

    // =============================================================================================
    // Comparison with the recorded experiments
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Model vs Experiment (errors × 1e-4)");
    println!("═══════════════════════════════════════════════════════\n");

    println!("{:<14} {:<10} {:>10} {:>10} {:>10}", "Experiment", "Location", "Average", "Max", "RMSE");
    println!("{:-<58}", "");

    for experiment in [Experiment::I, Experiment::II] {
        for location in [MeasurementLocation::Surface, MeasurementLocation::Depth] {
            let comparison = compare_with_experiment(experiment, location)?;
            let m = comparison.metrics;
            println!("{:<14} {:<10} {:>10.4} {:>10.4} {:>10.4}",
                     experiment.to_string(), location.to_string(), m.average, m.max, m.rmse);
        }
    }

    println!("\n═══════════════════════════════════════════════════════\n");

    Ok(())
}
