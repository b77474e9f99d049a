//! Loading historical close prices from tabular sources

use crate::error::{ForecastError, Result};
use log::debug;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Name of the required value column.
const CLOSE_COLUMN: &str = "close";

/// Ordered univariate price series.
///
/// Row order is preserved from the source and assumed chronological; the
/// loader never sorts.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    values: Vec<f64>,
}

/// Loader for historical close prices
#[derive(Debug)]
pub struct PriceLoader;

impl PriceLoader {
    /// Load the close-price series from a CSV file.
    ///
    /// The file must contain a `Close` column (matched case-insensitively).
    /// Rows with a missing close value are dropped, not imputed.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<PriceSeries> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ForecastError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let df = CsvReader::new(file)
            .infer_schema(None)
            .has_header(true)
            .finish()?;

        let series = Self::from_dataframe(&df)?;
        debug!(
            "loaded {} close prices from {}",
            series.len(),
            path.display()
        );
        Ok(series)
    }

    /// Extract the close-price series from an existing DataFrame.
    pub fn from_dataframe(df: &DataFrame) -> Result<PriceSeries> {
        let column = Self::detect_close_column(df)?;
        let values = Self::column_as_f64(df, &column)?;

        if values.is_empty() {
            return Err(ForecastError::EmptySeries);
        }

        Ok(PriceSeries { values })
    }

    /// Find the close column in a DataFrame, matching case-insensitively.
    fn detect_close_column(df: &DataFrame) -> Result<String> {
        for name in df.get_column_names() {
            if name.to_lowercase() == CLOSE_COLUMN {
                return Ok(name.to_string());
            }
        }

        Err(ForecastError::MissingColumn("Close".to_string()))
    }

    /// Read a column as f64 values, dropping nulls.
    fn column_as_f64(df: &DataFrame, column_name: &str) -> Result<Vec<f64>> {
        let col = df.column(column_name)?;

        match col.dtype() {
            DataType::Float64 => Ok(col.f64()?.into_iter().flatten().collect()),
            DataType::Float32 => Ok(col
                .f32()?
                .into_iter()
                .flatten()
                .map(|v| v as f64)
                .collect()),
            DataType::Int64 => Ok(col
                .i64()?
                .into_iter()
                .flatten()
                .map(|v| v as f64)
                .collect()),
            DataType::Int32 => Ok(col
                .i32()?
                .into_iter()
                .flatten()
                .map(|v| v as f64)
                .collect()),
            _ => Err(ForecastError::Polars(format!(
                "Column '{}' cannot be read as f64",
                column_name
            ))),
        }
    }
}

impl PriceSeries {
    /// Create a series from raw values (primarily for testing)
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Values in source row order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no observations
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
