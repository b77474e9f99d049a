//! Pre-trained regression models for single-step prediction

use crate::error::{ForecastError, Result};
use crate::window::Window;
use log::debug;
use std::fmt::Debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub mod linear;

pub use linear::LinearRegressor;

/// A pre-trained regression model mapping one window to one normalized
/// scalar.
///
/// This is the only seam the forecaster depends on: any backend that can
/// produce a single next value from a fixed-length window qualifies. The
/// model is treated as immutable once loaded, so `predict` borrows `&self`
/// and concurrent invocations may share one instance.
pub trait Regressor: Debug {
    /// Predict the next normalized value from a window.
    fn predict(&self, window: &Window) -> Result<f64>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Deserialize a pre-trained model from a JSON file.
///
/// Fails with `NotFound` when the file is absent and `Deserialization`
/// when it cannot be parsed as a model.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<LinearRegressor> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ForecastError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let model: LinearRegressor = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| ForecastError::Deserialization(e.to_string()))?;

    debug!(
        "loaded {} ({} inputs) from {}",
        model.name(),
        model.input_len(),
        path.display()
    );
    Ok(model)
}
