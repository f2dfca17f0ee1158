//! Numerical solver traits and types
//!
//! # Design Philosophy
//!
//! This module follows the same pattern as `PhysicalQuantity`:
//! - Central enum `SolverType` defines the type of numerical solution
//! - `SolverConfiguration` wraps a `SolverType` and validates it
//! - `SimulationResult` is the same for every solver, with string metadata
//!   for whatever a particular method wants to report

use nalgebra::DVector;
use std::collections::HashMap;

use crate::error::{PhotolysisError, PhotolysisResult};
use crate::physics::{PhysicalQuantity, PhysicalSeries};
use crate::solver::Scenario;

// =================================================================================================
// Central Solver Type Enumeration
// =================================================================================================

/// Type of numerical solution method
///
/// # Examples
///
/// ```rust
/// use photolysis_rs::solver::SolverType;
///
/// // Closed-form evaluation on the grid
/// let exact = SolverType::Analytical;
///
/// // ODE integration, 10 RK4 steps between two grid samples
/// let integrated = SolverType::TimeEvolution { substeps: 10 };
///
/// assert_eq!(exact.name(), "Analytical");
/// assert!(integrated.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum SolverType {
    /// Exact solution `y(t)` evaluated at every grid sample
    Analytical,

    /// Time integration of `dy/dt = f(t, y)` over the grid
    ///
    /// # Parameters
    /// - `substeps`: integration steps per grid interval
    TimeEvolution { substeps: usize },
}

impl SolverType {
    /// Get name identifier
    pub fn name(&self) -> &str {
        match self {
            SolverType::Analytical => "Analytical",
            SolverType::TimeEvolution { .. } => "TimeEvolution",
        }
    }

    /// Validate that parameters are meaningful
    pub fn validate(&self) -> PhotolysisResult<()> {
        match self {
            SolverType::Analytical => Ok(()),
            SolverType::TimeEvolution { substeps } => {
                if *substeps == 0 {
                    return Err(PhotolysisError::invalid_parameter(
                        "substeps",
                        "must be greater than 0",
                    ));
                }
                Ok(())
            }
        }
    }
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration for numerical solver
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfiguration {
    /// Type of solver and its parameters
    pub solver_type: SolverType,
}

impl SolverConfiguration {
    /// Create a new configuration with a given solver type
    pub fn new(solver_type: SolverType) -> Self {
        Self { solver_type }
    }

    /// Create an analytical solver configuration
    pub fn analytical() -> Self {
        Self::new(SolverType::Analytical)
    }

    /// Create a time evolution configuration
    pub fn time_evolution(substeps: usize) -> Self {
        Self::new(SolverType::TimeEvolution { substeps })
    }

    /// Validate configuration
    pub fn validate(&self) -> PhotolysisResult<()> {
        self.solver_type.validate()
    }
}

impl Default for SolverConfiguration {
    fn default() -> Self {
        Self::analytical()
    }
}

// =================================================================================================
// Simulation result
// =================================================================================================

/// Output of any solver: one value per grid sample
///
/// # Structure
///
/// - `time_points`: grid times
/// - `values`: solution at each time, tagged with its quantity
/// - `metadata`: free-form key/value pairs (solver name, step size, ...)
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResult {
    pub time_points: DVector<f64>,
    pub values: PhysicalSeries,
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Create a result
    ///
    /// # Errors
    ///
    /// Time and value vectors of different lengths.
    pub fn new(time_points: DVector<f64>, values: PhysicalSeries) -> PhotolysisResult<Self> {
        if time_points.len() != values.len() {
            return Err(PhotolysisError::length_mismatch(
                "time points",
                time_points.len(),
                "values",
                values.len(),
            ));
        }
        Ok(Self {
            time_points,
            values,
            metadata: HashMap::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.time_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_points.is_empty()
    }

    pub fn quantity(&self) -> PhysicalQuantity {
        self.values.quantity()
    }

    /// Value at the last grid sample
    pub fn final_value(&self) -> Option<f64> {
        self.values.last()
    }

    /// Add a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// A numerical method applied to a [`Scenario`]
///
/// Solvers are stateless: the same instance can solve any number of
/// scenarios.
pub trait Solver {
    /// Solve `scenario` according to `config`
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> PhotolysisResult<SimulationResult>;

    /// Solver name
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================
