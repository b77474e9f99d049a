//! Error types for the price_forecast crate

use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for the price_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Data source or model file does not exist
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Required column is absent from the data source
    #[error("required column '{0}' is missing from the data source")]
    MissingColumn(String),

    /// No observations survive missing-value removal
    #[error("series is empty after dropping missing values")]
    EmptySeries,

    /// Zero-variance series cannot be normalized
    #[error("degenerate series: every value equals {min}, cannot fit a min-max scale")]
    DegenerateRange { min: f64 },

    /// Series is too short to cut a seed window
    #[error("insufficient data: need at least {needed} observations, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Model file is unreadable or corrupt
    #[error("model deserialization failed: {0}")]
    Deserialization(String),

    /// Window length does not match the model's expected input length
    #[error("window of length {got} does not match model input length {expected}")]
    WindowMismatch { expected: usize, got: usize },

    /// Error from invalid parameters
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from JSON serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    Polars(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<polars::prelude::PolarsError> for ForecastError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        ForecastError::Polars(err.to_string())
    }
}
