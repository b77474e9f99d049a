//! # Price Forecast
//!
//! A Rust library for recursive multi-step price forecasting with
//! pre-trained regression models.
//!
//! ## Features
//!
//! - Close-price series loading from CSV (missing values dropped)
//! - Reversible min-max normalization with explicit scaler state
//! - Fixed-length windowing with a functional slide
//! - Pluggable single-step regression models loaded from disk
//! - Recursive forecasting: each prediction feeds the next step
//! - Denormalized results stamped with forward daily-close dates
//!
//! ## Quick Start
//!
//! ```no_run
//! use price_forecast::forecast;
//!
//! fn main() -> price_forecast::Result<()> {
//!     // 7-day forecast from historical prices and a serialized model
//!     let result = forecast("prices.csv", "model.json", 7)?;
//!
//!     for point in result.points() {
//!         println!("{}", point);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The pipeline is synchronous and stateless across invocations: every
//! stage is a pure transformation of the previous stage's output, so
//! independent forecasts may run on parallel threads, each loading its own
//! model (or sharing one immutably).

pub mod data;
pub mod error;
pub mod forecaster;
pub mod models;
pub mod result;
pub mod scaler;
pub mod window;

// Re-export commonly used types
pub use crate::data::{PriceLoader, PriceSeries};
pub use crate::error::{ForecastError, Result};
pub use crate::forecaster::{forecast, recursive_forecast};
pub use crate::models::{load_model, LinearRegressor, Regressor};
pub use crate::result::{ForecastPoint, ForecastResult};
pub use crate::scaler::MinMaxScaler;
pub use crate::window::{labeled_windows, Window, SEQUENCE_LEN};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
