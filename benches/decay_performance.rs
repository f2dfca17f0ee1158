//! Performance benchmarks for the decay pipeline
//!
//! # What We're Measuring
//!
//! 1. **Closed form**: one `exp` per sample, the path taken on every
//!    control change
//! 2. **RK4 cross-check**: 4 rate evaluations per substep, scaled by the
//!    substep count
//! 3. **Lab series**: logistic model plus derived quantities per sample
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --bench decay_performance
//!
//! # Only the solver comparison
//! cargo bench --bench decay_performance comparison
//! ```
//!
//! # Understanding Results
//!
//! The closed form on the standard grid should stay in the microsecond
//! range; anything slower points at allocation in the hot path. RK4 time
//! should grow linearly with the substep count.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use photolysis_rs::controls::{ControlId, ControlPanel};
use photolysis_rs::models::{
    compute_decay_curve, compute_decay_curve_on, DecayParameters, FirstOrderDecay, LabConditions,
    RefractiveSeries,
};
use photolysis_rs::solver::{
    AnalyticalSolver, RK4Solver, Scenario, Solver, SolverConfiguration, TimeGrid,
};

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// One pipeline compute at the default parameters
fn benchmark_compute_decay_curve(c: &mut Criterion) {
    let parameters = DecayParameters::default();

    c.bench_function("compute_decay_curve (100 samples)", |b| {
        b.iter(|| compute_decay_curve(black_box(parameters)))
    });
}

/// Clamp + compute, as done on every slider move
fn benchmark_control_change(c: &mut Criterion) {
    c.bench_function("set k + recompute", |b| {
        let mut panel = ControlPanel::new();
        let mut k = 0.001;
        b.iter(|| {
            k = if k > 1.0 { 0.001 } else { k + 0.01 };
            panel.set(ControlId::RateConstant, black_box(k)).unwrap();
            compute_decay_curve(panel.parameters())
        })
    });
}

/// Closed form on denser grids
///
/// Time should scale linearly with the sample count.
fn benchmark_grid_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Closed Form Grid Scaling");
    let parameters = DecayParameters::default();

    for samples in [100, 1_000, 10_000, 100_000].iter() {
        let grid = TimeGrid::new(0.0, 100.0, *samples).unwrap();
        group.throughput(Throughput::Elements(*samples as u64));
        group.bench_with_input(BenchmarkId::from_parameter(samples), &grid, |b, grid| {
            b.iter(|| compute_decay_curve_on(black_box(parameters), black_box(grid)))
        });
    }

    group.finish();
}

/// Analytical solver against RK4 with growing substep counts
fn benchmark_solver_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Solver Comparison");

    let model = FirstOrderDecay::from_parameters(DecayParameters::default());
    let scenario = Scenario::new(Box::new(model), TimeGrid::standard());

    {
        let config = SolverConfiguration::analytical();
        let solver = AnalyticalSolver::new();
        group.bench_function("Analytical", |b| {
            b.iter(|| solver.solve(black_box(&scenario), black_box(&config)).unwrap())
        });
    }

    for substeps in [1, 10, 100].iter() {
        let config = SolverConfiguration::time_evolution(*substeps);
        let solver = RK4Solver::new();

        // 4 rate evaluations per substep, 99 intervals
        group.throughput(Throughput::Elements((4 * substeps * 99) as u64));
        group.bench_with_input(
            BenchmarkId::new("Runge-Kutta 4", format!("{} substeps", substeps)),
            &config,
            |b, config| b.iter(|| solver.solve(black_box(&scenario), black_box(config)).unwrap()),
        );
    }

    group.finish();
}

/// Lab run over one hour at half-minute resolution
fn benchmark_refractive_series(c: &mut Criterion) {
    let conditions = LabConditions::default();

    c.bench_function("RefractiveSeries 60 min / 0.5 min", |b| {
        b.iter(|| RefractiveSeries::generate(black_box(60.0), black_box(0.5), conditions).unwrap())
    });
}

// =================================================================================================
// Criterion Configuration
// =================================================================================================

criterion_group!(
    benches,
    benchmark_compute_decay_curve,
    benchmark_control_change,
    benchmark_grid_scaling,
    benchmark_solver_comparison,
    benchmark_refractive_series,
);
criterion_main!(benches);
