//! Domain-wide properties of the decay pipeline
//!
//! Covers: curve shape over the whole control domain, clamping of
//! arbitrary inputs, the reference scenarios, and the refractive-index
//! presets.

use approx::assert_relative_eq;
use proptest::prelude::*;

use photolysis_rs::analysis::compare_series;
use photolysis_rs::controls::{
    ControlId, ControlPanel, INITIAL_CONC_RANGE, RATE_CONSTANT_RANGE,
};
use photolysis_rs::models::{
    compute_decay_curve, DecayParameters, Experiment, LogisticParameters, MeasurementLocation,
};
use photolysis_rs::physics::{PhysicalQuantity, PhysicalSeries};

fn params(initial_conc: f64, rate_constant: f64) -> DecayParameters {
    DecayParameters::new(initial_conc, rate_constant).unwrap()
}

// ── Curve shape ──────────────────────────────────────────────────────

proptest! {
    /// The curve starts exactly at the initial concentration.
    #[test]
    fn curve_starts_at_initial_conc(
        c0 in 1.0f64..=100.0,
        k in 0.001f64..=1.0,
    ) {
        let curve = compute_decay_curve(params(c0, k));
        prop_assert_eq!(curve.concentration().first(), Some(c0));
    }

    /// Concentration never rises.
    #[test]
    fn curve_is_non_increasing(
        c0 in 1.0f64..=100.0,
        k in 0.001f64..=1.0,
    ) {
        let curve = compute_decay_curve(params(c0, k));
        let values = curve.concentration().as_slice();
        for pair in values.windows(2) {
            prop_assert!(pair[1] <= pair[0]);
        }
    }

    /// 100 samples from 0 to exactly 100.
    #[test]
    fn time_axis_is_fixed(
        c0 in 1.0f64..=100.0,
        k in 0.001f64..=1.0,
    ) {
        let curve = compute_decay_curve(params(c0, k));
        let time = curve.time();
        prop_assert_eq!(time.len(), 100);
        prop_assert_eq!(time[0], 0.0);
        prop_assert_eq!(time[99], 100.0);
    }

    /// Same inputs, bit-identical outputs.
    #[test]
    fn compute_is_deterministic(
        c0 in 1.0f64..=100.0,
        k in 0.001f64..=1.0,
    ) {
        let a = compute_decay_curve(params(c0, k));
        let b = compute_decay_curve(params(c0, k));
        prop_assert_eq!(a, b);
    }

    /// The extreme rate constants bound every other curve.
    #[test]
    fn extreme_rate_constants_bound_curves(
        c0 in 1.0f64..=100.0,
        k in 0.001f64..=1.0,
    ) {
        let (k_min, k_max) = RATE_CONSTANT_RANGE;
        let slowest = compute_decay_curve(params(c0, k_min));
        let fastest = compute_decay_curve(params(c0, k_max));
        let curve = compute_decay_curve(params(c0, k));

        let upper = slowest.concentration().as_slice();
        let lower = fastest.concentration().as_slice();
        for (i, &c) in curve.concentration().as_slice().iter().enumerate() {
            prop_assert!(lower[i] <= c && c <= upper[i], "sample {} out of bounds", i);
        }
    }
}

// ── Clamping ─────────────────────────────────────────────────────────

proptest! {
    /// Any finite input ends up inside the control range.
    #[test]
    fn set_keeps_values_in_range(
        c0 in -1e6f64..1e6,
        k in -1e3f64..1e3,
    ) {
        let mut panel = ControlPanel::new();
        panel.set(ControlId::InitialConc, c0).unwrap();
        panel.set(ControlId::RateConstant, k).unwrap();

        let p = panel.parameters();
        prop_assert!(p.initial_conc >= INITIAL_CONC_RANGE.0 && p.initial_conc <= INITIAL_CONC_RANGE.1);
        prop_assert!(p.rate_constant >= RATE_CONSTANT_RANGE.0 && p.rate_constant <= RATE_CONSTANT_RANGE.1);
    }

    /// Stepping never leaves the range either.
    #[test]
    fn stepping_keeps_values_in_range(ups in 0usize..200, downs in 0usize..200) {
        let mut panel = ControlPanel::new();
        for _ in 0..ups {
            panel.increment(ControlId::RateConstant);
        }
        for _ in 0..downs {
            panel.decrement(ControlId::RateConstant);
        }
        let k = panel.parameters().rate_constant;
        prop_assert!(k >= RATE_CONSTANT_RANGE.0 && k <= RATE_CONSTANT_RANGE.1);
    }
}

// ── Reference scenarios ──────────────────────────────────────────────

#[test]
fn test_default_scenario() {
    let curve = compute_decay_curve(DecayParameters::default());
    let c = curve.concentration();

    assert_eq!(c.first(), Some(10.0));
    assert_relative_eq!(c.last().unwrap(), 0.0674, epsilon = 1e-4);
}

#[test]
fn test_slowest_smallest_scenario() {
    let curve = compute_decay_curve(params(1.0, 0.001));
    assert_relative_eq!(curve.concentration().last().unwrap(), 0.9048, epsilon = 1e-4);
}

#[test]
fn test_fastest_largest_scenario() {
    let curve = compute_decay_curve(params(100.0, 1.0));
    let c = curve.concentration();

    assert_eq!(c.first(), Some(100.0));
    assert!(c.last().unwrap() < 1e-40);
    assert!(c.last().unwrap() >= 0.0);
}

#[test]
fn test_out_of_range_input_is_clamped_before_compute() {
    let panel = ControlPanel::with_values(250.0, 0.0).unwrap();
    let curve = compute_decay_curve(panel.parameters());

    assert_eq!(curve.concentration().first(), Some(100.0));
    assert_eq!(curve.parameters().rate_constant, 0.001);
}

// ── Refractive-index presets ─────────────────────────────────────────

#[test]
fn test_presets_start_at_initial_and_decay_toward_final() {
    for experiment in [Experiment::I, Experiment::II] {
        for location in [MeasurementLocation::Surface, MeasurementLocation::Depth] {
            let p = LogisticParameters::preset(experiment, location);

            assert_relative_eq!(p.refractive_index(0.0), p.n_initial, epsilon = 1e-12);

            let mut previous = p.refractive_index(0.0);
            for step in 1..=400 {
                let n = p.refractive_index(step as f64 * 0.5);
                assert!(n <= previous, "{} {} rises at step {}", experiment, location, step);
                assert!(n > p.n_final);
                previous = n;
            }
        }
    }
}

#[test]
fn test_self_comparison_is_zero() {
    let series = PhysicalSeries::from_vec(
        PhysicalQuantity::RefractiveIndex,
        vec![1.48788, 1.48750, 1.48690, 1.48640],
    );
    let metrics = compare_series(&series, &series).unwrap();

    assert_eq!(metrics.average, 0.0);
    assert_eq!(metrics.max, 0.0);
    assert_eq!(metrics.rmse, 0.0);
}
