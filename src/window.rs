//! Fixed-length windows over a normalized series

use crate::error::{ForecastError, Result};

/// Window length used by the daily-close models.
pub const SEQUENCE_LEN: usize = 60;

/// Fixed-length ordered subsequence of a normalized series.
///
/// A `Window` is an owned value. Sliding it produces a new `Window`; the
/// buffer backing one forecast step is never observed by a later step.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    values: Vec<f64>,
}

impl Window {
    /// Cut the trailing `len` values of a series as the forecast seed.
    ///
    /// Fails with `InsufficientData` when the series is shorter than `len`.
    pub fn seed(series: &[f64], len: usize) -> Result<Self> {
        if len == 0 {
            return Err(ForecastError::InvalidParameter(
                "Window length must be positive".to_string(),
            ));
        }
        if series.len() < len {
            return Err(ForecastError::InsufficientData {
                needed: len,
                got: series.len(),
            });
        }

        Ok(Self {
            values: series[series.len() - len..].to_vec(),
        })
    }

    /// Slide forward by one step: drop the oldest value, append `next`.
    ///
    /// Returns a new `Window` of the same length.
    pub fn slide(&self, next: f64) -> Window {
        let mut values = Vec::with_capacity(self.values.len());
        values.extend_from_slice(&self.values[1..]);
        values.push(next);
        Window { values }
    }

    /// Values in chronological order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Window length
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the window holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Pair every contiguous window of `len` values with the value that follows
/// it. Used when preparing training or evaluation data; the forecast loop
/// itself only needs the seed window.
///
/// Returns an empty vector when the series has no complete window-label
/// pair.
pub fn labeled_windows(series: &[f64], len: usize) -> Vec<(Window, f64)> {
    if len == 0 || series.len() <= len {
        return Vec::new();
    }

    (0..series.len() - len)
        .map(|i| {
            let window = Window {
                values: series[i..i + len].to_vec(),
            };
            (window, series[i + len])
        })
        .collect()
}
