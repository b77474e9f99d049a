//! Recursive multi-step forecasting

use crate::data::PriceLoader;
use crate::error::Result;
use crate::models::{load_model, Regressor};
use crate::result::ForecastResult;
use crate::scaler::MinMaxScaler;
use crate::window::{Window, SEQUENCE_LEN};
use chrono::Local;
use log::{debug, info};
use std::path::Path;

/// Predict `horizon` normalized values by feeding each prediction back
/// into the model.
///
/// Each step predicts one value from the current window, then slides the
/// window to include that prediction. The slide is a pure functional step:
/// every iteration consumes a new `Window` value. Beyond the first step the
/// input contains the model's own prior outputs rather than observed data,
/// so error compounds with the horizon; there is no future ground truth to
/// feed back instead.
///
/// A horizon of zero yields an empty vector and never invokes the model.
pub fn recursive_forecast<M>(seed: Window, model: &M, horizon: usize) -> Result<Vec<f64>>
where
    M: Regressor + ?Sized,
{
    let mut predictions = Vec::with_capacity(horizon);
    let mut window = seed;

    for _ in 0..horizon {
        let next = model.predict(&window)?;
        predictions.push(next);
        window = window.slide(next);
    }

    Ok(predictions)
}

/// Run the full forecast pipeline: load a close-price series, fit and
/// apply the scaler, cut the seed window, forecast recursively, and format
/// the result with forward dates.
///
/// Fails fast at the first failing stage; there is no partial result. The
/// returned forecast holds exactly `horizon` points dated from today.
pub fn forecast<P, Q>(series_source: P, model_path: Q, horizon: usize) -> Result<ForecastResult>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let series = PriceLoader::from_csv(series_source)?;

    let scaler = MinMaxScaler::fit(series.values())?;
    let scaled = scaler.transform(series.values());

    let seed = Window::seed(&scaled, SEQUENCE_LEN)?;
    let model = load_model(model_path)?;

    info!(
        "forecasting {} periods with {} from a window of {}",
        horizon,
        model.name(),
        seed.len()
    );
    let raw = recursive_forecast(seed, &model, horizon)?;
    debug!("raw normalized predictions: {:?}", raw);

    let as_of = Local::now().date_naive();
    Ok(ForecastResult::from_normalized(&raw, &scaler, as_of))
}
