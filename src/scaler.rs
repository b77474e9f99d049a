//! Min-max normalization with an explicit, reversible scaler state

use crate::error::{ForecastError, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Immutable min-max scaler fitted over one series.
///
/// The state records the `(min, max)` pair of the series it was fitted on.
/// `transform` maps values onto `[0, 1]` via `(x - min) / (max - min)` and
/// `inverse` recovers the original scale via `x * (max - min) + min`. The
/// same state must be used for both directions; states fitted on different
/// series are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    min: f64,
    max: f64,
}

impl MinMaxScaler {
    /// Fit a scaler over a series.
    ///
    /// Fails with `EmptySeries` when there is nothing to fit, and with
    /// `DegenerateRange` when every value is identical (the transform would
    /// divide by zero).
    pub fn fit(series: &[f64]) -> Result<Self> {
        if series.is_empty() {
            return Err(ForecastError::EmptySeries);
        }

        let min = series.iter().copied().fold(f64::INFINITY, f64::min);
        let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if max == min {
            return Err(ForecastError::DegenerateRange { min });
        }

        debug!("fitted min-max scaler: min={}, max={}", min, max);
        Ok(Self { min, max })
    }

    /// Map values onto `[0, 1]` using the fitted range.
    pub fn transform(&self, series: &[f64]) -> Vec<f64> {
        let range = self.max - self.min;
        series.iter().map(|&x| (x - self.min) / range).collect()
    }

    /// Recover original-scale values from normalized ones.
    pub fn inverse(&self, series: &[f64]) -> Vec<f64> {
        let range = self.max - self.min;
        series.iter().map(|&x| x * range + self.min).collect()
    }

    /// Minimum of the fitted series
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Maximum of the fitted series
    pub fn max(&self) -> f64 {
        self.max
    }
}
