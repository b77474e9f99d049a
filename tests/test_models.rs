use price_forecast::{load_model, ForecastError, LinearRegressor, Regressor, Window};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_predict_is_dot_product_plus_bias() {
    let model = LinearRegressor::new(vec![0.5, 0.25, 0.25], 1.0).unwrap();
    let window = Window::seed(&[2.0, 4.0, 8.0], 3).unwrap();

    let prediction = model.predict(&window).unwrap();

    // 0.5*2 + 0.25*4 + 0.25*8 + 1 = 5
    assert!((prediction - 5.0).abs() < 1e-12);
}

#[test]
fn test_empty_weights_are_rejected() {
    let result = LinearRegressor::new(Vec::new(), 0.0);
    assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));
}

#[test]
fn test_window_length_mismatch_is_an_error() {
    let model = LinearRegressor::new(vec![1.0, 1.0], 0.0).unwrap();
    let window = Window::seed(&[1.0, 2.0, 3.0], 3).unwrap();

    let result = model.predict(&window);
    assert!(matches!(
        result,
        Err(ForecastError::WindowMismatch {
            expected: 2,
            got: 3
        })
    ));
}

#[test]
fn test_load_model_from_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"weights": [0.0, 0.0, 1.0], "bias": 0.5}}"#).unwrap();

    let model = load_model(file.path()).unwrap();

    assert_eq!(model.input_len(), 3);
    let window = Window::seed(&[1.0, 2.0, 3.0], 3).unwrap();
    let prediction = model.predict(&window).unwrap();
    assert!((prediction - 3.5).abs() < 1e-12);
}

#[test]
fn test_load_missing_model_is_not_found() {
    let result = load_model("nonexistent_model.json");
    assert!(matches!(result, Err(ForecastError::NotFound(_))));
}

#[test]
fn test_load_corrupt_model_is_a_deserialization_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not a model").unwrap();

    let result = load_model(file.path());
    assert!(matches!(result, Err(ForecastError::Deserialization(_))));
}

#[test]
fn test_model_name() {
    let model = LinearRegressor::new(vec![1.0], 0.0).unwrap();
    assert_eq!(model.name(), "linear regression");
}
