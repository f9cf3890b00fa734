//! Evenly spaced time grids for fixed-step integration.
//!
//! A grid is described by a `start`, a `stop` bound, and a `step`. The number
//! of points is the truncation of `(stop - start) / step`, so the grid is
//! half-open: it begins at `start` and generally ends short of `stop`.
//!
//! ```
//! use odestep_core::grid;
//!
//! let times = grid::linspace(0.0, 2.0, 0.5)?;
//! assert_eq!(times, vec![0.0, 0.5, 1.0, 1.5]);
//! # Ok::<(), grid::Error>(())
//! ```

use thiserror::Error;

/// Invalid-argument failures of the grid generator.
///
/// Every variant names the argument check that `start`, `stop`, and `step`
/// failed; none of them is raised after points have been generated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("grid bounds and step must be finite")]
    NonFinite,

    #[error("step must be positive")]
    NonPositiveStep,

    #[error("stop must be greater than start")]
    EmptyInterval,

    #[error("interval is shorter than one step")]
    TooFewPoints,

    #[error("interval holds more points than a grid can store")]
    TooManyPoints,
}

/// Largest point count whose `Vec<f64>` fits in the address space.
const MAX_POINTS: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// A validated description of an evenly spaced grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    start: f64,
    stop: f64,
    step: f64,
    len: usize,
}

impl Spacing {
    /// Creates a new spacing from its bounds and step.
    ///
    /// # Errors
    ///
    /// Returns an error if any argument is non-finite, if `step` is not
    /// positive, if `stop` does not exceed `start`, or if the interval holds
    /// fewer than one step or more points than a `Vec<f64>` can hold.
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self, Error> {
        if !start.is_finite() || !stop.is_finite() || !step.is_finite() {
            return Err(Error::NonFinite);
        }
        if step <= 0.0 {
            return Err(Error::NonPositiveStep);
        }
        if stop <= start {
            return Err(Error::EmptyInterval);
        }

        // A step below the interval's resolution overflows the ratio.
        let ratio = (stop - start) / step;
        if !ratio.is_finite() {
            return Err(Error::NonFinite);
        }

        #[allow(clippy::cast_precision_loss)]
        let max_points = MAX_POINTS as f64;
        if ratio >= max_points {
            return Err(Error::TooManyPoints);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let len = ratio as usize;
        if len == 0 {
            return Err(Error::TooFewPoints);
        }

        Ok(Self {
            start,
            stop,
            step,
            len,
        })
    }

    /// Returns the first grid point.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the exclusive upper bound.
    #[must_use]
    pub fn stop(&self) -> f64 {
        self.stop
    }

    /// Returns the distance between consecutive points.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the number of grid points.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Generates the grid points.
    ///
    /// Each point is the previous one plus `step`. Rounding error accumulates
    /// across the grid and is not corrected.
    #[must_use]
    pub fn points(&self) -> Vec<f64> {
        let step = self.step;
        std::iter::successors(Some(self.start), |prev| Some(prev + step))
            .take(self.len)
            .collect()
    }
}

/// Generates evenly spaced points from `start` toward `stop`.
///
/// Despite the name, the result does not include `stop`: the point count is
/// `(stop - start) / step` truncated toward zero, so the last point is
/// `start + (len - 1) * step`. `linspace(0.0, 10.0, 1.0)` yields `0..=9` and
/// `linspace(0.0, 1.0, 0.3)` yields `[0.0, 0.3, 0.6]`.
///
/// # Errors
///
/// Returns an error for the same inputs that [`Spacing::new`] rejects.
pub fn linspace(start: f64, stop: f64, step: f64) -> Result<Vec<f64>, Error> {
    Spacing::new(start, stop, step).map(|spacing| spacing.points())
}
