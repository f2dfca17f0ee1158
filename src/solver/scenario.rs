//! Simulation scenario definition
//!
//! A scenario combines a physical model with the time grid it is sampled on.
use crate::physics::PhysicalModel;
use crate::solver::TimeGrid;

/// Simulation scenario
///
/// Defines a specific case to simulate:
/// - Physical model (equations)
/// - Time grid (where the solution is wanted)
///
/// # Design
///
/// The same scenario can be solved with different numerical methods.
/// This is the "WHAT to solve" (not "HOW to solve").
///
/// # Examples
///
/// ```rust
/// use photolysis_rs::models::FirstOrderDecay;
/// use photolysis_rs::solver::{Scenario, TimeGrid};
///
/// let model = FirstOrderDecay::new(10.0, 0.05).unwrap();
/// let scenario = Scenario::new(Box::new(model), TimeGrid::standard());
/// assert_eq!(scenario.get_model_name(), "First-Order Photolysis");
/// ```
pub struct Scenario {
    /// Physical model (equations)
    pub model: Box<dyn PhysicalModel>,

    /// Sampling grid
    pub grid: TimeGrid,
}

impl Scenario {
    /// Create a scenario
    pub fn new(model: Box<dyn PhysicalModel>, grid: TimeGrid) -> Self {
        Self { model, grid }
    }

    /// Get model name
    pub fn get_model_name(&self) -> &str {
        self.model.name()
    }

    /// Initial value of the model, `y(grid.start)`
    pub fn initial_value(&self) -> f64 {
        self.model.evaluate(self.grid.start())
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.get_model_name())
            .field("quantity", &self.model.quantity())
            .field("grid", &self.grid)
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::PhysicalQuantity;

    struct ConstantModel;

    impl PhysicalModel for ConstantModel {
        fn quantity(&self) -> PhysicalQuantity {
            PhysicalQuantity::Custom("Constant")
        }

        fn initial_value(&self) -> f64 {
            3.0
        }

        fn evaluate(&self, _time: f64) -> f64 {
            3.0
        }

        fn rate(&self, _time: f64, _value: f64) -> f64 {
            0.0
        }

        fn name(&self) -> &str {
            "Constant"
        }
    }

    #[test]
    fn test_scenario_accessors() {
        let scenario = Scenario::new(Box::new(ConstantModel), TimeGrid::standard());
        assert_eq!(scenario.get_model_name(), "Constant");
        assert_eq!(scenario.initial_value(), 3.0);
        assert_eq!(scenario.grid.len(), 100);
    }

    #[test]
    fn test_scenario_debug() {
        let scenario = Scenario::new(Box::new(ConstantModel), TimeGrid::standard());
        let debug = format!("{:?}", scenario);
        assert!(debug.contains("Constant"));
        assert!(debug.contains("grid"));
    }
}
