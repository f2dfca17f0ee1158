//! Evenly spaced time grids
//!
//! A [`TimeGrid`] is the sampling domain shared by every solver. Sample `i`
//! sits at `start + i * spacing` and the last sample is pinned to `end`, so
//! both endpoints are always represented exactly (the same contract as
//! `linspace` with an inclusive endpoint).

use nalgebra::DVector;

use crate::error::{PhotolysisError, PhotolysisResult};

/// Inclusive, evenly spaced time grid
///
/// # Example
///
/// ```rust
/// use photolysis_rs::solver::TimeGrid;
///
/// let grid = TimeGrid::standard();
/// let t = grid.points();
///
/// assert_eq!(t.len(), 100);
/// assert_eq!(t[0], 0.0);
/// assert_eq!(t[99], 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    start: f64,
    end: f64,
    samples: usize,
}

impl TimeGrid {
    /// Number of samples of the standard decay grid
    pub const STANDARD_SAMPLES: usize = 100;

    /// Last time of the standard decay grid
    pub const STANDARD_END: f64 = 100.0;

    /// Create a grid of `samples` points covering `[start, end]`
    ///
    /// # Errors
    ///
    /// - non-finite bounds
    /// - `end <= start`
    /// - fewer than 2 samples
    pub fn new(start: f64, end: f64, samples: usize) -> PhotolysisResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(PhotolysisError::InvalidGrid(format!(
                "bounds must be finite, got [{}, {}]",
                start, end
            )));
        }
        if end <= start {
            return Err(PhotolysisError::InvalidGrid(format!(
                "end ({}) must be greater than start ({})",
                end, start
            )));
        }
        if samples < 2 {
            return Err(PhotolysisError::InvalidGrid(format!(
                "at least 2 samples are required, got {}",
                samples
            )));
        }

        Ok(Self { start, end, samples })
    }

    /// The fixed grid of the decay demonstrator: 100 samples over `[0, 100]`
    pub fn standard() -> Self {
        Self {
            start: 0.0,
            end: Self::STANDARD_END,
            samples: Self::STANDARD_SAMPLES,
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn len(&self) -> usize {
        self.samples
    }

    /// Always false: a grid holds at least two samples
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Distance between consecutive samples
    pub fn spacing(&self) -> f64 {
        (self.end - self.start) / (self.samples - 1) as f64
    }

    /// Time of sample `index`
    ///
    /// Computed from the index rather than by accumulation, so rounding does
    /// not drift along the grid. The last index returns `end` exactly.
    pub fn time(&self, index: usize) -> f64 {
        if index + 1 == self.samples {
            self.end
        } else {
            self.start + index as f64 * self.spacing()
        }
    }

    /// All sample times
    pub fn points(&self) -> DVector<f64> {
        DVector::from_fn(self.samples, |i, _| self.time(i))
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::standard()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
