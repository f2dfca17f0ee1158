//! Physical data series
//!
//! A [`PhysicalSeries`] is a one-dimensional sequence of values of a single
//! [`PhysicalQuantity`], one value per time sample. Storage is a
//! `nalgebra::DVector<f64>`.

use nalgebra::DVector;
use std::fmt;

use super::traits::PhysicalQuantity;

/// Tagged 1D series of physical values
///
/// # Example
///
/// ```rust
/// use photolysis_rs::physics::{PhysicalQuantity, PhysicalSeries};
///
/// let series = PhysicalSeries::from_vec(PhysicalQuantity::Concentration, vec![10.0, 5.0, 2.5]);
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.first(), Some(10.0));
/// assert!(series.is_non_increasing());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalSeries {
    quantity: PhysicalQuantity,
    values: DVector<f64>,
}

impl PhysicalSeries {
    // ======================================= constructors =======================================

    /// Create from DVector
    pub fn new(quantity: PhysicalQuantity, values: DVector<f64>) -> Self {
        Self { quantity, values }
    }

    /// Create from vector
    pub fn from_vec(quantity: PhysicalQuantity, values: Vec<f64>) -> Self {
        Self::new(quantity, DVector::from_vec(values))
    }

    // ======================================= accessors ==========================================

    pub fn quantity(&self) -> PhysicalQuantity {
        self.quantity
    }

    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }

    pub fn as_slice(&self) -> &[f64] {
        self.values.as_slice()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn first(&self) -> Option<f64> {
        self.get(0)
    }

    pub fn last(&self) -> Option<f64> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Largest value, `None` when empty
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// Smallest value, `None` when empty
    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    // ======================================= invariants =========================================

    /// `values[i] >= values[i + 1]` for every consecutive pair
    pub fn is_non_increasing(&self) -> bool {
        self.values
            .as_slice()
            .windows(2)
            .all(|pair| pair[0] >= pair[1])
    }

    /// No NaN or infinite value
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }

    /// Apply a function elementwise, in place
    pub fn apply<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64,
    {
        self.values.apply(|v| *v = f(*v));
    }
}

impl fmt::Display for PhysicalSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{} samples]", self.quantity.header(), self.len())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: Vec<f64>) -> PhysicalSeries {
        PhysicalSeries::from_vec(PhysicalQuantity::Concentration, values)
    }

    #[test]
    fn test_first_last_on_empty() {
        let s = series(vec![]);
        assert!(s.is_empty());
        assert_eq!(s.first(), None);
        assert_eq!(s.last(), None);
        assert_eq!(s.max(), None);
    }

    #[test]
    fn test_min_max() {
        let s = series(vec![3.0, 7.5, -1.0, 2.0]);
        assert_eq!(s.max(), Some(7.5));
        assert_eq!(s.min(), Some(-1.0));
    }

    #[test]
    fn test_non_increasing_accepts_plateau() {
        assert!(series(vec![5.0, 5.0, 4.0, 4.0]).is_non_increasing());
        assert!(!series(vec![5.0, 4.0, 4.5]).is_non_increasing());
    }

    #[test]
    fn test_finite_detection() {
        assert!(series(vec![1.0, 2.0]).is_finite());
        assert!(!series(vec![1.0, f64::NAN]).is_finite());
        assert!(!series(vec![f64::INFINITY]).is_finite());
    }

    #[test]
    fn test_apply_scales_values() {
        let mut s = series(vec![1.0, 2.0]);
        s.apply(|v| v * 10.0);
        assert_eq!(s.as_slice(), &[10.0, 20.0]);
    }

    #[test]
    fn test_display() {
        let s = series(vec![1.0, 2.0, 3.0]);
        assert_eq!(s.to_string(), "Concentration (ppm) [3 samples]");
    }
}
