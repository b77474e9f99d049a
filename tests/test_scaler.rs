use price_forecast::{ForecastError, MinMaxScaler};

#[test]
fn test_fit_records_range() {
    let series = vec![2.0, 8.0, 5.0, 4.0];
    let scaler = MinMaxScaler::fit(&series).unwrap();

    assert_eq!(scaler.min(), 2.0);
    assert_eq!(scaler.max(), 8.0);
}

#[test]
fn test_transform_maps_onto_unit_interval() {
    let series = vec![10.0, 20.0, 30.0, 40.0, 50.0];
    let scaler = MinMaxScaler::fit(&series).unwrap();
    let scaled = scaler.transform(&series);

    assert!((scaled[0] - 0.0).abs() < 1e-12);
    assert!((scaled[2] - 0.5).abs() < 1e-12);
    assert!((scaled[4] - 1.0).abs() < 1e-12);
}

#[test]
fn test_round_trip_recovers_original() {
    let series = vec![101.5, 99.25, 104.75, 98.0, 110.125, 103.0];
    let scaler = MinMaxScaler::fit(&series).unwrap();

    let recovered = scaler.inverse(&scaler.transform(&series));

    for (orig, rec) in series.iter().zip(recovered.iter()) {
        assert!((orig - rec).abs() < 1e-9, "{} != {}", orig, rec);
    }
}

#[test]
fn test_negative_values() {
    let series = vec![-10.0, 0.0, 10.0];
    let scaler = MinMaxScaler::fit(&series).unwrap();
    let scaled = scaler.transform(&series);

    assert!((scaled[0] - 0.0).abs() < 1e-12);
    assert!((scaled[1] - 0.5).abs() < 1e-12);
    assert!((scaled[2] - 1.0).abs() < 1e-12);
}

#[test]
fn test_degenerate_series_is_an_error() {
    let series = vec![5.0; 10];
    let result = MinMaxScaler::fit(&series);

    assert!(matches!(
        result,
        Err(ForecastError::DegenerateRange { min }) if min == 5.0
    ));
}

#[test]
fn test_empty_series_is_an_error() {
    let result = MinMaxScaler::fit(&[]);
    assert!(matches!(result, Err(ForecastError::EmptySeries)));
}

#[test]
fn test_state_applies_to_new_data() {
    // The fitted state, not the transformed data, carries the range
    let series = vec![0.0, 100.0];
    let scaler = MinMaxScaler::fit(&series).unwrap();

    let scaled = scaler.transform(&[25.0, 75.0, 150.0]);
    assert!((scaled[0] - 0.25).abs() < 1e-12);
    assert!((scaled[1] - 0.75).abs() < 1e-12);
    // Values outside the fitted range map outside [0, 1]
    assert!(scaled[2] > 1.0);
}
