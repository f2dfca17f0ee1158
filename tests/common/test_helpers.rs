//! Helper functions for integration tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use photolysis_rs::models::FirstOrderDecay;
use photolysis_rs::physics::{PhysicalModel, PhysicalQuantity};
use photolysis_rs::solver::{
    AnalyticalSolver, RK4Solver, Scenario, SimulationResult, Solver, SolverConfiguration, TimeGrid,
};

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Largest point-wise relative error between two results
pub fn max_relative_error(actual: &SimulationResult, expected: &SimulationResult) -> f64 {
    assert_eq!(actual.len(), expected.len(), "Dimension mismatch");

    actual
        .values
        .as_slice()
        .iter()
        .zip(expected.values.as_slice())
        .map(|(&a, &e)| relative_error(a, e))
        .fold(0.0, f64::max)
}

/// First-order decay on `grid`
pub fn create_decay_scenario(initial_conc: f64, rate_constant: f64, grid: TimeGrid) -> Scenario {
    let model = FirstOrderDecay::new(initial_conc, rate_constant).unwrap();
    Scenario::new(Box::new(model), grid)
}

/// Closed form and RK4 results on the standard grid
pub fn solve_both(
    initial_conc: f64,
    rate_constant: f64,
    substeps: usize,
) -> (SimulationResult, SimulationResult) {
    let scenario = create_decay_scenario(initial_conc, rate_constant, TimeGrid::standard());

    let exact = AnalyticalSolver::new()
        .solve(&scenario, &SolverConfiguration::analytical())
        .unwrap();
    let rk4 = RK4Solver::new()
        .solve(&scenario, &SolverConfiguration::time_evolution(substeps))
        .unwrap();

    (exact, rk4)
}

/// Decay model that counts how often its right-hand side is evaluated
///
/// The counter is shared so it can be read after the model is boxed into
/// a [`Scenario`].
pub struct CountingDecay {
    inner: FirstOrderDecay,
    rate_calls: Arc<AtomicUsize>,
}

impl CountingDecay {
    pub fn new(initial_conc: f64, rate_constant: f64) -> Self {
        Self {
            inner: FirstOrderDecay::new(initial_conc, rate_constant).unwrap(),
            rate_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.rate_calls)
    }
}

impl PhysicalModel for CountingDecay {
    fn quantity(&self) -> PhysicalQuantity {
        self.inner.quantity()
    }

    fn initial_value(&self) -> f64 {
        self.inner.initial_value()
    }

    fn evaluate(&self, time: f64) -> f64 {
        self.inner.evaluate(time)
    }

    fn rate(&self, time: f64, value: f64) -> f64 {
        self.rate_calls.fetch_add(1, Ordering::Relaxed);
        self.inner.rate(time, value)
    }

    fn name(&self) -> &str {
        "Counting Decay"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
