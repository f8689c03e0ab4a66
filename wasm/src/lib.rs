//! WebAssembly module for Farmie
//!
//! Provides client-side computation for:
//! - Crop suitability scores
//! - Weather summaries from daily samples
//! - Offline crop recommendations
//!
//! All inputs and outputs cross the boundary as JSON strings.

use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str(concat!(
        "farmie-wasm ",
        env!("CARGO_PKG_VERSION")
    )));
}

/// Input of an offline recommendation
#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub reference_crop: String,
    pub crops: Vec<CropProfile>,
    pub weather: WeatherSummary,
    #[serde(default)]
    pub records: Vec<CultivationRecord>,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_MAX_RECOMMENDATIONS
}

fn to_js_error(message: String) -> JsValue {
    js_sys::Error::new(&message).into()
}

/// Score one crop against a reference family and a climate summary
#[wasm_bindgen]
pub fn score_crop(crop_json: &str, reference_family: &str, weather_json: &str) -> Result<f64, JsValue> {
    score_crop_json(crop_json, reference_family, weather_json).map_err(to_js_error)
}

/// Reduce daily samples to a climate summary (JSON)
#[wasm_bindgen]
pub fn summarize_weather(samples_json: &str) -> Result<String, JsValue> {
    summarize_weather_json(samples_json).map_err(to_js_error)
}

/// Recommend crops offline; returns a JSON array of crop names
#[wasm_bindgen]
pub fn rank_crops(request_json: &str) -> Result<String, JsValue> {
    rank_crops_json(request_json).map_err(to_js_error)
}

fn score_crop_json(crop_json: &str, reference_family: &str, weather_json: &str) -> Result<f64, String> {
    let crop: CropProfile =
        serde_json::from_str(crop_json).map_err(|e| format!("Invalid crop JSON: {}", e))?;
    let weather: WeatherSummary =
        serde_json::from_str(weather_json).map_err(|e| format!("Invalid weather JSON: {}", e))?;

    let score = shared::score_crop(&crop, reference_family, &weather);
    Ok(score.to_f64().unwrap_or(0.0))
}

fn summarize_weather_json(samples_json: &str) -> Result<String, String> {
    let samples: Vec<WeatherSample> =
        serde_json::from_str(samples_json).map_err(|e| format!("Invalid samples JSON: {}", e))?;

    serde_json::to_string(&summarize_samples(&samples)).map_err(|e| e.to_string())
}

fn rank_crops_json(request_json: &str) -> Result<String, String> {
    let request: RankRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid request JSON: {}", e))?;

    let reference = find_crop(&request.crops, &request.reference_crop)
        .ok_or_else(|| format!("Crop not found: {}", request.reference_crop))?;

    let cultivation = aggregate_cultivation(
        request.crops.iter().map(|crop| crop.name.as_str()),
        &request.records,
    );
    let scores = score_corpus(&request.crops, &reference.family, &request.weather, &cultivation);
    let names = rank_recommendations(
        scores,
        &request.reference_crop,
        cultivation.most_cultivated.as_deref(),
        request.limit,
    );

    serde_json::to_string(&names).map_err(|e| e.to_string())
}
