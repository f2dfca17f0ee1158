//! Common utilities for integration tests

#![allow(dead_code)]

pub mod test_helpers;

// Re-export commonly used items
pub use test_helpers::{
    create_decay_scenario,
    max_relative_error,
    relative_error,
    solve_both,
    CountingDecay,
};
