//! Numerical solvers
//!
//! This module provides traits and implementations for numerical solvers.
//! A numerical solver applies a numerical method to the equations provided by
//! a physical model, on the time grid of a scenario.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Physical model (equations)
//!    - Time grid (where the solution is sampled)
//!
//! 2. **Configuration** (`SolverConfiguration`) - HOW to solve
//!    - Solver type (analytical or time evolution)
//!    - Numerical parameters (sub-steps)
//!
//! 3. **Solver** (`Solver` trait) - The numerical method
//!    - Applies the numerical scheme
//!    - Returns the solution
//!    - Independent of physics
//!
//! # Module Organization
//!
//! - **`grid`**: `TimeGrid`, inclusive evenly spaced sampling
//! - **`traits`**: `Solver`, `SolverType`, `SolverConfiguration`, `SimulationResult`
//! - **`scenario`**: `Scenario`, model + grid
//! - **`methods`**: `AnalyticalSolver`, `RK4Solver`
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐   ┌───────────┐
//! │  Physical Model │   │ Time Grid │
//! └────────┬────────┘   └─────┬─────┘
//!          └───────┬──────────┘
//!         ┌────────▼────────┐
//!         │ Scenario        │ ← WHAT to solve
//!         └────────┬────────┘
//!         ┌────────▼─────────────┐
//!         │ Solver Configuration │ ← HOW to solve
//!         └────────┬─────────────┘
//!         ┌────────▼────────┐
//!         │ Numerical Solver│ ← The method
//!         └────────┬────────┘
//!         ┌────────▼────────────┐
//!         │ Simulation Result   │ ← The solution
//!         └─────────────────────┘
//! ```
//!
//! # Error Handling
//!
//! All solver methods return [`PhotolysisResult`](crate::error::PhotolysisResult).
//! Common errors:
//! - Invalid configuration (zero sub-steps)
//! - Configuration not supported by the chosen solver
//! - Numerical instability (NaN or Inf in the solution)

// =================================================================================================
// Module Declarations
// =================================================================================================
mod grid;
mod methods;
mod scenario;
mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use grid::TimeGrid;
pub use methods::{AnalyticalSolver, RK4Solver};
pub use scenario::Scenario;
pub use traits::{SimulationResult, Solver, SolverConfiguration, SolverType};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::error::{PhotolysisError, PhotolysisResult};
use crate::physics::PhysicalSeries;

/// Check one integrated value for NaN or Inf
///
/// `step` is the grid index reached, used in the error message.
pub(crate) fn validate_value(value: f64, model: &str, step: usize) -> PhotolysisResult<()> {
    if value.is_nan() {
        return Err(PhotolysisError::NonFinite(format!(
            "'{}' at sample {} (NaN, numerical instability: increase substeps)",
            model, step
        )));
    }
    if value.is_infinite() {
        return Err(PhotolysisError::NonFinite(format!(
            "'{}' at sample {} (overflow: increase substeps or check the model)",
            model, step
        )));
    }
    Ok(())
}

/// Check a whole series for NaN or Inf
pub(crate) fn validate_series(series: &PhysicalSeries, model: &str) -> PhotolysisResult<()> {
    match series.as_slice().iter().position(|v| !v.is_finite()) {
        Some(index) => validate_value(series.as_slice()[index], model, index),
        None => Ok(()),
    }
}

// =================================================================================================
// Tests
// =================================================================================================
