//! Runge-Kutta 4 (RK4) numerical solver
//!
//! # Mathematical Background
//!
//! The classical fourth-order Runge-Kutta method integrates
//!
//! ```text
//! dy/dt = f(t, y)
//! ```
//!
//! with a weighted average of four slope estimates:
//!
//! ```text
//! k₁ = f(tₙ,        yₙ)
//! k₂ = f(tₙ + dt/2, yₙ + dt/2 · k₁)
//! k₃ = f(tₙ + dt/2, yₙ + dt/2 · k₂)
//! k₄ = f(tₙ + dt,   yₙ + dt · k₃)
//!
//! yₙ₊₁ = yₙ + dt/6 · (k₁ + 2k₂ + 2k₃ + k₄)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: Fourth-order accurate (global error ~ O(dt⁴))
//! - **Complexity**: 4 function evaluations per step
//! - **Memory**: O(1) besides the stored trajectory
//!
//! # Grid and sub-steps
//!
//! The solution is reported on the scenario's [`TimeGrid`](crate::solver::TimeGrid).
//! Each grid interval is split into `substeps` equal RK4 steps, so the step
//! size is `spacing / substeps`. For the decay demonstrator this solver is a
//! cross-check: with 10 sub-steps on the standard grid the relative error
//! against `C0 · exp(-k · t)` stays far below 1e-6 for `k = 0.05`.
//!
//! # Example
//!
//! ```rust
//! use photolysis_rs::models::FirstOrderDecay;
//! use photolysis_rs::solver::{RK4Solver, Scenario, Solver, SolverConfiguration, TimeGrid};
//!
//! let model = FirstOrderDecay::new(10.0, 0.05).unwrap();
//! let scenario = Scenario::new(Box::new(model), TimeGrid::standard());
//!
//! let result = RK4Solver::new()
//!     .solve(&scenario, &SolverConfiguration::time_evolution(10))
//!     .unwrap();
//! assert_eq!(result.len(), 100);
//! ```

use nalgebra::DVector;

use crate::error::{PhotolysisError, PhotolysisResult};
use crate::physics::PhysicalSeries;
use crate::solver::{
    validate_value, Scenario, SimulationResult, Solver, SolverConfiguration, SolverType,
};

// =================================================================================================
// RK4 Solver
// =================================================================================================

/// Classical fourth-order Runge-Kutta solver
///
/// # Error Analysis
///
/// - **Local truncation error**: O(dt⁵) per step
/// - **Global error**: O(dt⁴)
///
/// Halving dt reduces the error by a factor of 16.
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4Solver;

impl RK4Solver {
    /// Create a new RK4 solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use photolysis_rs::solver::{RK4Solver, Solver};
    ///
    /// let solver = RK4Solver::new();
    /// assert_eq!(solver.name(), "Runge Kutta (RK4)");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for RK4Solver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> PhotolysisResult<SimulationResult> {
        // ====== Step 1: Validation ======

        config.validate()?;

        let substeps = match &config.solver_type {
            SolverType::TimeEvolution { substeps } => *substeps,
            other => {
                return Err(PhotolysisError::UnsupportedConfiguration {
                    solver: self.name().to_string(),
                    configuration: other.name().to_string(),
                });
            }
        };

        // ====== Step 2: Setup ======

        let grid = &scenario.grid;
        let model = &scenario.model;
        let samples = grid.len();

        let mut values = Vec::with_capacity(samples);
        let mut y = scenario.initial_value();
        values.push(y);

        // ====== Step 3: Time Integration ======

        for interval in 0..samples - 1 {
            // Interval bounds come from the grid so the last sample lands on `end`
            let t_start = grid.time(interval);
            let t_end = grid.time(interval + 1);
            let dt = (t_end - t_start) / substeps as f64;

            for sub in 0..substeps {
                let t = t_start + sub as f64 * dt;

                // ====== RK4 Stages ======

                let k1 = model.rate(t, y);
                let k2 = model.rate(t + dt / 2.0, y + dt / 2.0 * k1);
                let k3 = model.rate(t + dt / 2.0, y + dt / 2.0 * k2);
                let k4 = model.rate(t + dt, y + dt * k3);

                // ====== RK4 Update ======

                y += dt / 6.0 * (k1 + 2.0 * k2 + 2.0 * k3 + k4);
            }

            // ====== Validation ======

            validate_value(y, model.name(), interval + 1)?;

            values.push(y);
        }

        // ====== Step 4: Build Result ======

        let time_points = grid.points();
        let series = PhysicalSeries::new(model.quantity(), DVector::from_vec(values));

        let mut result = SimulationResult::new(time_points, series)?;
        result.add_metadata("solver", "Runge-Kutta 4");
        result.add_metadata("model", scenario.get_model_name());
        result.add_metadata("samples", &samples.to_string());
        result.add_metadata("substeps", &substeps.to_string());
        result.add_metadata("dt", &(grid.spacing() / substeps as f64).to_string());
        result.add_metadata(
            "function evaluations",
            &(4 * substeps * (samples - 1)).to_string(),
        );

        log::debug!(
            "RK4 solved '{}' on {} samples with {} substeps",
            scenario.get_model_name(),
            samples,
            substeps
        );

        Ok(result)
    }

    fn name(&self) -> &str {
        "Runge Kutta (RK4)"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FirstOrderDecay;
    use crate::physics::{PhysicalModel, PhysicalQuantity};
    use crate::solver::TimeGrid;
    use approx::assert_relative_eq;

    /// Mock model: constant growth dy/dt = c, y(t) = y0 + c·t
    struct ConstantGrowth {
        start: f64,
        growth_rate: f64,
    }

    impl PhysicalModel for ConstantGrowth {
        fn quantity(&self) -> PhysicalQuantity {
            PhysicalQuantity::Custom("Growth")
        }

        fn initial_value(&self) -> f64 {
            self.start
        }

        fn evaluate(&self, time: f64) -> f64 {
            self.start + self.growth_rate * time
        }

        fn rate(&self, _time: f64, _value: f64) -> f64 {
            self.growth_rate
        }

        fn name(&self) -> &str {
            "Constant Growth"
        }
    }

    /// Mock model whose derivative depends on time only: y(t) = t²
    struct Parabola;

    impl PhysicalModel for Parabola {
        fn quantity(&self) -> PhysicalQuantity {
            PhysicalQuantity::Custom("Parabola")
        }

        fn initial_value(&self) -> f64 {
            0.0
        }

        fn evaluate(&self, time: f64) -> f64 {
            time * time
        }

        fn rate(&self, time: f64, _value: f64) -> f64 {
            2.0 * time
        }

        fn name(&self) -> &str {
            "Parabola"
        }
    }

    /// Mock model that blows up: dy/dt = y²
    struct Explosive;

    impl PhysicalModel for Explosive {
        fn quantity(&self) -> PhysicalQuantity {
            PhysicalQuantity::Custom("Explosive")
        }

        fn initial_value(&self) -> f64 {
            1.0
        }

        fn evaluate(&self, time: f64) -> f64 {
            1.0 / (1.0 - time)
        }

        fn rate(&self, _time: f64, value: f64) -> f64 {
            value * value
        }

        fn name(&self) -> &str {
            "Explosive"
        }
    }

    #[test]
    fn test_linear_growth_is_exact() {
        let scenario = Scenario::new(
            Box::new(ConstantGrowth {
                start: 2.0,
                growth_rate: 0.5,
            }),
            TimeGrid::new(0.0, 10.0, 11).unwrap(),
        );
        let result = RK4Solver::new()
            .solve(&scenario, &SolverConfiguration::time_evolution(1))
            .unwrap();

        assert_relative_eq!(result.final_value().unwrap(), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_time_dependent_rate_uses_stage_times() {
        let scenario = Scenario::new(Box::new(Parabola), TimeGrid::new(0.0, 4.0, 5).unwrap());
        let result = RK4Solver::new()
            .solve(&scenario, &SolverConfiguration::time_evolution(1))
            .unwrap();

        // Simpson's rule integrates a linear derivative exactly
        assert_relative_eq!(result.final_value().unwrap(), 16.0, epsilon = 1e-12);
    }

    #[test]
    fn test_decay_accuracy_default_parameters() {
        let model = FirstOrderDecay::new(10.0, 0.05).unwrap();
        let scenario = Scenario::new(Box::new(model), TimeGrid::standard());
        let result = RK4Solver::new()
            .solve(&scenario, &SolverConfiguration::time_evolution(10))
            .unwrap();

        for (t, y) in result.time_points.iter().zip(result.values.as_slice()) {
            assert_relative_eq!(*y, model.evaluate(*t), max_relative = 1e-6);
        }
    }

    #[test]
    fn test_offset_grid_matches_analytical() {
        use crate::solver::AnalyticalSolver;

        let model = FirstOrderDecay::new(10.0, 0.1).unwrap();
        let scenario = Scenario::new(Box::new(model), TimeGrid::new(10.0, 20.0, 11).unwrap());

        let exact = AnalyticalSolver::new()
            .solve(&scenario, &SolverConfiguration::analytical())
            .unwrap();
        let rk4 = RK4Solver::new()
            .solve(&scenario, &SolverConfiguration::time_evolution(10))
            .unwrap();

        assert_relative_eq!(rk4.values.first().unwrap(), model.evaluate(10.0), epsilon = 1e-12);
        for (e, r) in exact.values.as_slice().iter().zip(rk4.values.as_slice()) {
            assert_relative_eq!(*r, *e, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_more_substeps_reduce_error() {
        let model = FirstOrderDecay::new(10.0, 1.0).unwrap();
        let scenario = Scenario::new(Box::new(model), TimeGrid::standard());
        let exact = model.evaluate(100.0);

        let coarse = RK4Solver::new()
            .solve(&scenario, &SolverConfiguration::time_evolution(1))
            .unwrap();
        let fine = RK4Solver::new()
            .solve(&scenario, &SolverConfiguration::time_evolution(8))
            .unwrap();

        let coarse_error = (coarse.final_value().unwrap() - exact).abs();
        let fine_error = (fine.final_value().unwrap() - exact).abs();
        assert!(fine_error < coarse_error);
    }

    #[test]
    fn test_rejects_analytical_config() {
        let scenario = Scenario::new(Box::new(Parabola), TimeGrid::standard());
        let err = RK4Solver::new()
            .solve(&scenario, &SolverConfiguration::analytical())
            .unwrap_err();
        assert!(matches!(err, PhotolysisError::UnsupportedConfiguration { .. }));
    }

    #[test]
    fn test_rejects_zero_substeps() {
        let scenario = Scenario::new(Box::new(Parabola), TimeGrid::standard());
        assert!(RK4Solver::new()
            .solve(&scenario, &SolverConfiguration::time_evolution(0))
            .is_err());
    }

    #[test]
    fn test_divergence_is_reported() {
        let scenario = Scenario::new(Box::new(Explosive), TimeGrid::new(0.0, 50.0, 11).unwrap());
        let err = RK4Solver::new()
            .solve(&scenario, &SolverConfiguration::time_evolution(1))
            .unwrap_err();
        assert!(matches!(err, PhotolysisError::NonFinite(_)));
    }

    #[test]
    fn test_metadata() {
        let model = FirstOrderDecay::new(10.0, 0.05).unwrap();
        let scenario = Scenario::new(Box::new(model), TimeGrid::standard());
        let result = RK4Solver::new()
            .solve(&scenario, &SolverConfiguration::time_evolution(4))
            .unwrap();

        assert_eq!(result.get_metadata("solver"), Some("Runge-Kutta 4"));
        assert_eq!(result.get_metadata("substeps"), Some("4"));
        assert_eq!(result.get_metadata("function evaluations"), Some("1584"));
    }
}
