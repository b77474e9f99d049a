//! Denormalized forecast results with forward-looking timestamps

use crate::error::Result;
use crate::scaler::MinMaxScaler;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};

/// Rendering used for forecast dates, matching the daily close convention
/// expected by the API layer.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One predicted future value in original units.
///
/// Serializes as `{"date": "YYYY-MM-DD 17:00:00", "predicted_value": f}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    /// Calendar timestamp of the predicted close
    #[serde(serialize_with = "serialize_close_datetime")]
    pub date: NaiveDateTime,
    /// Predicted value, denormalized back to the original scale
    pub predicted_value: f64,
}

/// Ordered forecast, one point per requested period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    points: Vec<ForecastPoint>,
}

impl ForecastResult {
    /// Denormalize raw predictions and attach forward dates.
    ///
    /// Each point is stamped `as_of + i days` for `i = 1..=horizon`, fixed
    /// to 17:00 (the observed daily close time). Order mirrors the raw
    /// predictions exactly.
    pub fn from_normalized(raw: &[f64], scaler: &MinMaxScaler, as_of: NaiveDate) -> Self {
        let close = NaiveTime::from_hms_opt(17, 0, 0).unwrap();

        let points = scaler
            .inverse(raw)
            .into_iter()
            .enumerate()
            .map(|(i, predicted_value)| ForecastPoint {
                date: (as_of + Duration::days(i as i64 + 1)).and_time(close),
                predicted_value,
            })
            .collect();

        Self { points }
    }

    /// Forecast points in chronological order
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Predicted values, without timestamps
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.predicted_value).collect()
    }

    /// Number of forecasted periods
    pub fn horizon(&self) -> usize {
        self.points.len()
    }

    /// Whether the forecast holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Serialize as the JSON list consumed by the API layer.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.points)?)
    }
}

impl std::fmt::Display for ForecastPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}  {:.4}",
            self.date.format(DATE_FORMAT),
            self.predicted_value
        )
    }
}

fn serialize_close_datetime<S>(date: &NaiveDateTime, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
}
