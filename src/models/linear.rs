//! Serialized linear regression backend

use crate::error::{ForecastError, Result};
use crate::models::Regressor;
use crate::window::Window;
use serde::{Deserialize, Serialize};

/// Linear regression over a fixed-length window.
///
/// The serialized form is a JSON object with one weight per window
/// position and a bias term:
///
/// ```json
/// { "weights": [0.0, 0.1, ...], "bias": 0.02 }
/// ```
///
/// Prediction is the dot product of the window with the weights, plus the
/// bias. Weights are fitted offline; this crate only consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    /// One weight per window position, oldest first
    weights: Vec<f64>,
    /// Additive bias term
    bias: f64,
}

impl LinearRegressor {
    /// Create a model from pre-fitted coefficients.
    pub fn new(weights: Vec<f64>, bias: f64) -> Result<Self> {
        if weights.is_empty() {
            return Err(ForecastError::InvalidParameter(
                "Model must have at least one weight".to_string(),
            ));
        }

        Ok(Self { weights, bias })
    }

    /// Window length the model expects
    pub fn input_len(&self) -> usize {
        self.weights.len()
    }
}

impl Regressor for LinearRegressor {
    fn predict(&self, window: &Window) -> Result<f64> {
        if window.len() != self.weights.len() {
            return Err(ForecastError::WindowMismatch {
                expected: self.weights.len(),
                got: window.len(),
            });
        }

        let dot: f64 = self
            .weights
            .iter()
            .zip(window.values())
            .map(|(w, x)| w * x)
            .sum();

        Ok(dot + self.bias)
    }

    fn name(&self) -> &str {
        "linear regression"
    }
}
