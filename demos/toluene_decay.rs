//! Example: Toluene Photolysis - Rate Constant Study
//!
//! Computes the first-order decay of toluene under UV light for the
//! slowest, default and fastest rate constants and cross-checks the
//! closed form against RK4.
//!
//! **Kinetics**:
//! - C(t) = C0 · exp(-k · t)
//! - 100 samples on [0, 100]
//!
//! **Parameters**:
//! - C0 = 10 ppm (default control value)
//! - k ∈ {0.001, 0.05, 1}

use photolysis_rs::{
    analysis::CurveSummary,
    controls::{ControlPanel, RATE_CONSTANT_RANGE},
    models::{compute_decay_curve, DecayParameters, FirstOrderDecay},
    output::{export_decay_curve_csv, plot_decay_comparison, plot_decay_curve, plot_results,
             CsvConfig, PlotConfig},
    solver::{AnalyticalSolver, RK4Solver, Scenario, Solver, SolverConfiguration, TimeGrid},
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  Toluene Photolysis - Decay Curve Study");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Controls ======

    let panel = ControlPanel::new();
    let parameters = panel.parameters();

    println!("Controls:");
    println!("  C0 : {} ppm", parameters.initial_conc);
    println!("  k  : {}\n", parameters.rate_constant);

    // ====== Temporary directory ======

    let tmp_dir = std::env::temp_dir();

    // =============================================================================================
    // Default curve
    // =============================================================================================

    let curve = compute_decay_curve(parameters);
    println!("Default curve: {}\n", CurveSummary::of_decay(&curve));

    let chart = tmp_dir.join("toluene_decay.png");
    plot_decay_curve(&curve, &chart, Some(&PlotConfig::decay_curve("Photolysis Decay Curve")))?;

    let csv = tmp_dir.join("toluene_decay.csv");
    let csv_config = CsvConfig { include_metadata: true, ..Default::default() };
    export_decay_curve_csv(&curve, &csv, Some(&csv_config))?;

    println!("  Chart : {}", chart.display());
    println!("  CSV   : {}", csv.display());

    // =============================================================================================
    // Rate constant sweep
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Rate Constant Sweep");
    println!("═══════════════════════════════════════════════════════\n");

    let (k_min, k_max) = RATE_CONSTANT_RANGE;
    let mut sweep = Vec::new();
    for k in [k_min, parameters.rate_constant, k_max] {
        let curve = compute_decay_curve(DecayParameters::new(parameters.initial_conc, k)?);
        sweep.push((format!("k = {}", k), curve));
    }

    println!("{:<12} {:>14} {:>12}", "Curve", "C(100) (ppm)", "Half-life");
    println!("{:-<40}", "");
    for (label, curve) in &sweep {
        let summary = CurveSummary::of_decay(curve);
        println!("{:<12} {:>14.6e} {:>12.2}",
                 label, summary.final_value, summary.half_life.unwrap_or(f64::NAN));
    }

    let labeled: Vec<(&str, _)> = sweep.iter().map(|(l, c)| (l.as_str(), c)).collect();
    let sweep_chart = tmp_dir.join("toluene_sweep.png");
    plot_decay_comparison(&labeled, &sweep_chart, None)?;
    println!("\n  Chart : {}", sweep_chart.display());

    // =============================================================================================
    // Accuracy: Analytical vs RK4
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Accuracy: Analytical vs RK4");
    println!("═══════════════════════════════════════════════════════\n");

    let model = FirstOrderDecay::from_parameters(parameters);
    let scenario = Scenario::new(Box::new(model), TimeGrid::standard());

    let exact = AnalyticalSolver::new().solve(&scenario, &SolverConfiguration::analytical())?;

    println!("{:<10} {:>16} {:>12}", "Substeps", "Max rel. error", "Time (ms)");
    println!("{:-<40}", "");

    let mut finest = None;
    for substeps in [1, 4, 16] {
        let start = Instant::now();
        let rk4 = RK4Solver::new()
            .solve(&scenario, &SolverConfiguration::time_evolution(substeps))?;
        let elapsed = start.elapsed().as_secs_f64() * 1e3;

        let worst = exact.values.as_slice()
            .iter()
            .zip(rk4.values.as_slice())
            .map(|(e, r)| ((r - e) / e).abs())
            .fold(0.0, f64::max);

        println!("{:<10} {:>16.3e} {:>12.3}", substeps, worst, elapsed);
        finest = Some(rk4);
    }

    if let Some(rk4) = &finest {
        let check_chart = tmp_dir.join("toluene_cross_check.png");
        plot_results(&[("Analytical", &exact), ("RK4", rk4)], &check_chart, None)?;
        println!("\n  Chart : {}", check_chart.display());
    }

    println!("\n═══════════════════════════════════════════════════════\n");

    Ok(())
}
