//! Closed-form solver
//!
//! Evaluates `model.evaluate(t)` at every grid sample. For the first-order
//! decay model this is exactly `C0 · exp(-k · t)`, the reference every other
//! solver is compared against.

use crate::physics::PhysicalSeries;
use crate::solver::{
    validate_series, Scenario, SimulationResult, Solver, SolverConfiguration, SolverType,
};
use crate::error::{PhotolysisError, PhotolysisResult};

/// Exact solver: no discretisation error, one evaluation per sample
///
/// # Example
///
/// ```rust
/// use photolysis_rs::models::FirstOrderDecay;
/// use photolysis_rs::solver::{AnalyticalSolver, Scenario, Solver, SolverConfiguration, TimeGrid};
///
/// let model = FirstOrderDecay::new(10.0, 0.05).unwrap();
/// let scenario = Scenario::new(Box::new(model), TimeGrid::standard());
///
/// let result = AnalyticalSolver::new()
///     .solve(&scenario, &SolverConfiguration::analytical())
///     .unwrap();
/// assert_eq!(result.len(), 100);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticalSolver;

impl AnalyticalSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Solver for AnalyticalSolver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> PhotolysisResult<SimulationResult> {
        // ====== Step 1: Validation ======

        config.validate()?;

        if config.solver_type != SolverType::Analytical {
            return Err(PhotolysisError::UnsupportedConfiguration {
                solver: self.name().to_string(),
                configuration: config.solver_type.name().to_string(),
            });
        }

        // ====== Step 2: Evaluation ======

        let time_points = scenario.grid.points();
        let values = PhysicalSeries::new(
            scenario.model.quantity(),
            time_points.map(|t| scenario.model.evaluate(t)),
        );

        validate_series(&values, scenario.model.name())?;

        // ====== Step 3: Build Result ======

        let mut result = SimulationResult::new(time_points, values)?;
        result.add_metadata("solver", self.name());
        result.add_metadata("model", scenario.get_model_name());
        result.add_metadata("samples", &scenario.grid.len().to_string());
        result.add_metadata("function evaluations", &scenario.grid.len().to_string());

        Ok(result)
    }

    fn name(&self) -> &str {
        "Analytical"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FirstOrderDecay;
    use crate::physics::PhysicalModel;
    use crate::solver::TimeGrid;

    fn decay_scenario(c0: f64, k: f64) -> Scenario {
        Scenario::new(
            Box::new(FirstOrderDecay::new(c0, k).unwrap()),
            TimeGrid::standard(),
        )
    }

    #[test]
    fn test_matches_closed_form() {
        let scenario = decay_scenario(10.0, 0.05);
        let model = FirstOrderDecay::new(10.0, 0.05).unwrap();
        let result = AnalyticalSolver::new()
            .solve(&scenario, &SolverConfiguration::analytical())
            .unwrap();

        for (t, c) in result.time_points.iter().zip(result.values.as_slice()) {
            assert_eq!(*c, model.evaluate(*t));
        }
    }

    #[test]
    fn test_rejects_time_evolution_config() {
        let scenario = decay_scenario(10.0, 0.05);
        let err = AnalyticalSolver::new()
            .solve(&scenario, &SolverConfiguration::time_evolution(10))
            .unwrap_err();
        assert!(matches!(err, PhotolysisError::UnsupportedConfiguration { .. }));
    }

    #[test]
    fn test_metadata() {
        let scenario = decay_scenario(5.0, 0.1);
        let result = AnalyticalSolver::new()
            .solve(&scenario, &SolverConfiguration::analytical())
            .unwrap();
        assert_eq!(result.get_metadata("solver"), Some("Analytical"));
        assert_eq!(result.get_metadata("samples"), Some("100"));
        assert_eq!(result.get_metadata("model"), Some("First-Order Photolysis"));
    }
}
