//! photolysis: command-line front end for the toluene photolysis simulator.
//!
//! Renders decay curves and refractive-index lab runs to chart files,
//! exports them to CSV, scores the lab presets against the recorded
//! experiments, and runs the interactive control session on stdin.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use photolysis_rs::analysis::{compare_with_experiment, CurveSummary};
use photolysis_rs::app::{run_session, DecayApp, OutputTargets};
use photolysis_rs::controls::{
    ControlPanel, RefractiveControls, INITIAL_CONC_DEFAULT, RATE_CONSTANT_DEFAULT,
    RATE_CONSTANT_RANGE,
};
use photolysis_rs::models::{
    compute_decay_curve, DecayParameters, Experiment, FirstOrderDecay, IrradiationMode,
    MeasurementLocation, RefractiveSeries,
};
use photolysis_rs::output::visualization::DECAY_TITLE;
use photolysis_rs::output::{
    export_decay_curve_csv, export_refractive_series_csv, plot_decay_comparison,
    plot_decay_curve, plot_photolysis_rate, plot_refractive_index, plot_results, CsvConfig,
    PlotConfig,
};
use photolysis_rs::solver::{
    AnalyticalSolver, RK4Solver, Scenario, Solver, SolverConfiguration, TimeGrid,
};

/// Toluene photolysis decay simulator.
#[derive(Parser)]
#[command(name = "photolysis")]
#[command(version, about = "First-order photolysis of toluene, plotted and exported.")]
struct Cli {
    /// Raise the log level (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and render one decay curve.
    Decay(DecayArgs),
    /// Overlay the slowest, default and fastest rate constants.
    Sweep(SweepArgs),
    /// Run the refractive-index lab model.
    Lab(LabArgs),
    /// Score a lab preset against its recorded experiment.
    Compare(CompareArgs),
    /// Adjust the controls interactively from stdin.
    Interactive(InteractiveArgs),
}

#[derive(Args)]
struct DecayArgs {
    /// Initial toluene concentration in ppm (clamped to [1, 100]).
    #[arg(long, default_value_t = INITIAL_CONC_DEFAULT)]
    initial_conc: f64,

    /// Photolysis rate constant (clamped to [0.001, 1]).
    #[arg(long, default_value_t = RATE_CONSTANT_DEFAULT)]
    rate_constant: f64,

    /// Chart file (.svg for vector output, anything else for PNG).
    #[arg(short, long, default_value = "decay.png")]
    output: PathBuf,

    /// Also export the curve to this CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Chart title.
    #[arg(long, default_value = DECAY_TITLE)]
    title: String,

    /// Chart width in pixels.
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Chart height in pixels.
    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Re-solve with RK4 and report the deviation from the closed form.
    #[arg(long)]
    cross_check: bool,
}

#[derive(Args)]
struct SweepArgs {
    /// Initial toluene concentration in ppm (clamped to [1, 100]).
    #[arg(long, default_value_t = INITIAL_CONC_DEFAULT)]
    initial_conc: f64,

    /// Chart file.
    #[arg(short, long, default_value = "sweep.png")]
    output: PathBuf,
}

#[derive(Args)]
struct LabArgs {
    /// Solution temperature in °C (clamped to [15, 30]).
    #[arg(long, default_value_t = 20.0)]
    temperature: f64,

    /// UV lamp intensity in W/cm² (clamped to [0.5, 2]).
    #[arg(long, default_value_t = 1.0)]
    uv_intensity: f64,

    /// Probe depth below the surface in mm (clamped to [0, 5]).
    #[arg(long, default_value_t = 0.0)]
    depth: f64,

    /// Irradiation side: top or bottom.
    #[arg(long, default_value = "top")]
    mode: IrradiationMode,

    /// Simulated duration in minutes.
    #[arg(long, default_value_t = 60.0)]
    duration: f64,

    /// Sampling step in minutes.
    #[arg(long, default_value_t = 0.5)]
    time_step: f64,

    /// Refractive index chart.
    #[arg(short, long, default_value = "refractive_index.png")]
    output: PathBuf,

    /// Photolysis rate chart.
    #[arg(long)]
    rate_output: Option<PathBuf>,

    /// Also export the run to this CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args)]
struct CompareArgs {
    /// Experiment: i (top irradiation) or ii (bottom irradiation).
    #[arg(long, default_value = "i")]
    experiment: Experiment,

    /// Measurement location: surface or depth.
    #[arg(long, default_value = "surface")]
    location: MeasurementLocation,
}

#[derive(Args)]
struct InteractiveArgs {
    /// Chart file re-rendered after every change.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// CSV file re-exported after every change.
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Decay(args) => cmd_decay(args),
        Commands::Sweep(args) => cmd_sweep(args),
        Commands::Lab(args) => cmd_lab(args),
        Commands::Compare(args) => cmd_compare(args),
        Commands::Interactive(args) => cmd_interactive(args),
    }
}

// ================================================================================================
// Subcommands
// ================================================================================================

fn cmd_decay(args: DecayArgs) -> Result<()> {
    let panel = ControlPanel::with_values(args.initial_conc, args.rate_constant)
        .context("invalid decay parameters")?;
    let parameters = panel.parameters();
    let curve = compute_decay_curve(parameters);

    let config = PlotConfig::decay_curve(args.title).size(args.width, args.height);
    plot_decay_curve(&curve, &args.output, Some(&config))
        .with_context(|| format!("failed to render {}", args.output.display()))?;

    if let Some(csv) = &args.csv {
        export_decay_curve_csv(&curve, csv, None)
            .with_context(|| format!("failed to export {}", csv.display()))?;
    }

    tracing::info!(
        initial_conc = parameters.initial_conc,
        rate_constant = parameters.rate_constant,
        "{}",
        CurveSummary::of_decay(&curve)
    );

    if args.cross_check {
        cross_check(parameters, &args.output)?;
    }
    Ok(())
}

/// Solve the same decay with RK4 and report the worst relative deviation
fn cross_check(parameters: DecayParameters, output: &std::path::Path) -> Result<()> {
    let model = FirstOrderDecay::from_parameters(parameters);
    let scenario = Scenario::new(Box::new(model), TimeGrid::standard());

    let exact = AnalyticalSolver::new()
        .solve(&scenario, &SolverConfiguration::analytical())
        .context("closed-form solve failed")?;
    let rk4 = RK4Solver::new()
        .solve(&scenario, &SolverConfiguration::time_evolution(10))
        .context("RK4 solve failed")?;

    let worst = exact
        .values
        .as_slice()
        .iter()
        .zip(rk4.values.as_slice())
        .map(|(e, r)| ((r - e) / e).abs())
        .fold(0.0, f64::max);

    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("decay");
    let path = output.with_file_name(format!("{stem}_cross_check.svg"));
    plot_results(&[("Analytical", &exact), ("RK4", &rk4)], &path, None)
        .with_context(|| format!("failed to render {}", path.display()))?;

    tracing::info!(max_relative_error = worst, "RK4 cross-check written to {}", path.display());
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> Result<()> {
    let (k_min, k_max) = RATE_CONSTANT_RANGE;
    let panel = ControlPanel::with_values(args.initial_conc, RATE_CONSTANT_DEFAULT)
        .context("invalid initial concentration")?;
    let c0 = panel.parameters().initial_conc;

    let curves = [k_min, RATE_CONSTANT_DEFAULT, k_max]
        .into_iter()
        .map(|k| {
            let parameters = DecayParameters::new(c0, k)?;
            Ok((format!("k = {k}"), compute_decay_curve(parameters)))
        })
        .collect::<photolysis_rs::PhotolysisResult<Vec<_>>>()?;

    let labeled: Vec<(&str, _)> = curves.iter().map(|(l, c)| (l.as_str(), c)).collect();
    plot_decay_comparison(&labeled, &args.output, None)
        .with_context(|| format!("failed to render {}", args.output.display()))?;

    tracing::info!(initial_conc = c0, "rate-constant sweep written to {}", args.output.display());
    Ok(())
}

fn cmd_lab(args: LabArgs) -> Result<()> {
    let controls =
        RefractiveControls::with_values(args.temperature, args.uv_intensity, args.depth, args.mode)
            .context("invalid lab conditions")?;
    let conditions = controls.conditions();

    let series = RefractiveSeries::generate(args.duration, args.time_step, conditions)
        .context("failed to generate the lab series")?;

    plot_refractive_index(&series, &args.output, None)
        .with_context(|| format!("failed to render {}", args.output.display()))?;

    if let Some(path) = &args.rate_output {
        plot_photolysis_rate(&series, path, None)
            .with_context(|| format!("failed to render {}", path.display()))?;
    }
    if let Some(path) = &args.csv {
        export_refractive_series_csv(&series, path, None)
            .with_context(|| format!("failed to export {}", path.display()))?;
    }

    let summary = CurveSummary::from_series(
        &series.refractive_index(),
        Some(series.parameters().t_half),
    )
    .context("empty lab series")?;
    let fringe_shift = series.samples().last().map_or(0.0, |s| s.fringe_shift);

    tracing::info!(
        mode = %conditions.mode,
        depth = conditions.depth,
        samples = series.len(),
        monotonic = summary.monotonic,
        "n {:.6} -> {:.6}, t_half {:.2} min, fringe shift {:.4}",
        summary.initial,
        summary.final_value,
        series.parameters().t_half,
        fringe_shift
    );
    Ok(())
}

fn cmd_compare(args: CompareArgs) -> Result<()> {
    let comparison = compare_with_experiment(args.experiment, args.location)
        .context("comparison failed")?;

    println!("{} ({})", comparison.experiment, comparison.location);
    println!("{:>8} {:>12} {:>12} {:>10}", "t (min)", "measured", "model", "error");
    for d in &comparison.deviations {
        println!(
            "{:>8.1} {:>12.6} {:>12.6} {:>10.4}",
            d.time, d.experimental, d.simulated, d.error
        );
    }
    println!(
        "average {:.4}, max {:.4}, rmse {:.4} (x1e-4)",
        comparison.metrics.average, comparison.metrics.max, comparison.metrics.rmse
    );
    Ok(())
}

fn cmd_interactive(args: InteractiveArgs) -> Result<()> {
    let outputs = OutputTargets {
        chart: args.output,
        csv: args.csv,
        plot_config: PlotConfig::decay_curve(DECAY_TITLE),
        csv_config: CsvConfig::default(),
    };
    let mut app = DecayApp::new(outputs);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = run_session(&mut app, stdin.lock(), stdout.lock())
        .context("interactive session failed")?;

    tracing::debug!(
        commands = outcome.commands,
        errors = outcome.errors,
        pipeline_runs = outcome.pipeline_runs,
        "session closed"
    );
    Ok(())
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_decay_defaults() {
        let cli = Cli::try_parse_from(["photolysis", "decay"]).unwrap();
        assert_eq!(cli.verbose, 0);
        let Commands::Decay(args) = cli.command else {
            panic!("expected decay");
        };
        assert_eq!(args.initial_conc, INITIAL_CONC_DEFAULT);
        assert_eq!(args.rate_constant, RATE_CONSTANT_DEFAULT);
        assert_eq!(args.output, PathBuf::from("decay.png"));
        assert_eq!(args.title, DECAY_TITLE);
        assert!(args.csv.is_none());
        assert!(!args.cross_check);
    }

    #[test]
    fn test_parse_decay_flags_and_verbosity() {
        let cli = Cli::try_parse_from([
            "photolysis",
            "-vv",
            "decay",
            "--initial-conc",
            "50",
            "--rate-constant",
            "0.2",
            "--csv",
            "out.csv",
            "--cross-check",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Decay(args) = cli.command else {
            panic!("expected decay");
        };
        assert_eq!(args.initial_conc, 50.0);
        assert_eq!(args.rate_constant, 0.2);
        assert_eq!(args.csv, Some(PathBuf::from("out.csv")));
        assert!(args.cross_check);
    }

    #[test]
    fn test_parse_sweep() {
        let cli = Cli::try_parse_from(["photolysis", "sweep", "--initial-conc", "25", "-o", "s.svg"])
            .unwrap();
        let Commands::Sweep(args) = cli.command else {
            panic!("expected sweep");
        };
        assert_eq!(args.initial_conc, 25.0);
        assert_eq!(args.output, PathBuf::from("s.svg"));
    }

    #[test]
    fn test_parse_lab_mode() {
        let cli = Cli::try_parse_from([
            "photolysis",
            "lab",
            "--mode",
            "bottom",
            "--depth",
            "3",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        let Commands::Lab(args) = cli.command else {
            panic!("expected lab");
        };
        assert_eq!(args.mode, IrradiationMode::Bottom);
        assert_eq!(args.depth, 3.0);
        assert_eq!(args.time_step, 0.5);

        assert!(Cli::try_parse_from(["photolysis", "lab", "--mode", "side"]).is_err());
    }

    #[test]
    fn test_parse_compare() {
        let cli = Cli::try_parse_from(["photolysis", "compare"]).unwrap();
        let Commands::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.experiment, Experiment::I);
        assert_eq!(args.location, MeasurementLocation::Surface);

        let cli = Cli::try_parse_from([
            "photolysis",
            "compare",
            "--experiment",
            "ii",
            "--location",
            "depth",
        ])
        .unwrap();
        let Commands::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.experiment, Experiment::II);
        assert_eq!(args.location, MeasurementLocation::Depth);

        assert!(Cli::try_parse_from(["photolysis", "compare", "--experiment", "iii"]).is_err());
    }

    #[test]
    fn test_parse_interactive() {
        let cli = Cli::try_parse_from(["photolysis", "interactive", "--output", "live.svg"]).unwrap();
        let Commands::Interactive(args) = cli.command else {
            panic!("expected interactive");
        };
        assert_eq!(args.output, Some(PathBuf::from("live.svg")));
        assert!(args.csv.is_none());
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["photolysis", "plot"]).is_err());
    }
}
