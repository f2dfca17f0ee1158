//! Numerical methods
//!
//! This module contains concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Available Methods
//!
//! - **[`AnalyticalSolver`]**: evaluates the model's closed form on the grid
//!   - Exact, 1 evaluation per sample
//!   - Use: the decay pipeline itself
//!
//! - **[`RK4Solver`]**: classical fourth-order Runge-Kutta
//!   - Order: Fourth-order O(dt⁴)
//!   - Cost: 4 function evaluations per sub-step
//!   - Use: numerical cross-check of the closed form
//!
//! # Example
//!
//! ```rust
//! use photolysis_rs::models::FirstOrderDecay;
//! use photolysis_rs::solver::{AnalyticalSolver, RK4Solver};
//! use photolysis_rs::solver::{Scenario, Solver, SolverConfiguration, TimeGrid};
//!
//! let model = FirstOrderDecay::new(10.0, 0.05).unwrap();
//! let scenario = Scenario::new(Box::new(model), TimeGrid::standard());
//!
//! let exact = AnalyticalSolver::new()
//!     .solve(&scenario, &SolverConfiguration::analytical())
//!     .unwrap();
//! let numeric = RK4Solver::new()
//!     .solve(&scenario, &SolverConfiguration::time_evolution(10))
//!     .unwrap();
//!
//! let gap = (exact.final_value().unwrap() - numeric.final_value().unwrap()).abs();
//! assert!(gap < 1e-8);
//! ```
//!
//! # Design Philosophy
//!
//! Each solver is:
//! - **Self-contained**: No shared mutable state
//! - **Stateless**: Can be reused for multiple simulations

mod analytical;
mod rk4;

// Re-exports for convenience
pub use analytical::AnalyticalSolver;
pub use rk4::RK4Solver;
