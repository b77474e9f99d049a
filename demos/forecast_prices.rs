use price_forecast::{forecast, SEQUENCE_LEN};
use std::fs;
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let dir = std::env::temp_dir().join("price_forecast_demo");
    fs::create_dir_all(&dir)?;

    // Write a synthetic daily close series: upward drift plus a cycle
    let csv_path = dir.join("prices.csv");
    let mut csv = fs::File::create(&csv_path)?;
    writeln!(csv, "Date,Close")?;
    for i in 0..120 {
        let price = 100.0 + 0.3 * i as f64 + 5.0 * (i as f64 / 9.0).sin();
        writeln!(csv, "2023-01-01,{:.4}", price)?;
    }

    // Write a pre-trained model: an averaging regressor weighted toward
    // the most recent quarter of the window
    let model_path = dir.join("model.json");
    let recent = SEQUENCE_LEN / 4;
    let mut weights = vec![0.0; SEQUENCE_LEN];
    for w in weights.iter_mut().skip(SEQUENCE_LEN - recent) {
        *w = 1.0 / recent as f64;
    }
    let model = serde_json::json!({ "weights": weights, "bias": 0.0 });
    fs::write(&model_path, serde_json::to_string_pretty(&model)?)?;

    // Forecast the next 7 days
    let result = forecast(&csv_path, &model_path, 7)?;

    println!("Forecast for the next {} days:", result.horizon());
    for point in result.points() {
        println!("  {}", point);
    }

    Ok(())
}
