//! Weather archive client for fetching historical daily weather
//!
//! Integrates with the Open-Meteo archive API. Each request asks for three
//! daily series over a date window; days the archive has no value for come
//! back as `null` and are kept as gaps.

use async_trait::async_trait;
use reqwest::{Client, Response};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{DateRange, GpsCoordinates, WeatherSample};

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Daily series requested from the archive, in request order
pub const DAILY_METRICS: [&str; 3] = [
    "temperature_2m_mean",
    "precipitation_sum",
    "relative_humidity_2m_mean",
];

/// Source of daily historical weather
#[async_trait]
pub trait WeatherArchive: Send + Sync {
    /// One sample per day of `window` at `coordinates`
    async fn daily_samples(
        &self,
        coordinates: GpsCoordinates,
        window: DateRange,
    ) -> AppResult<Vec<WeatherSample>>;
}

/// Open-Meteo archive client
#[derive(Clone)]
pub struct ArchiveClient {
    client: Client,
    base_url: String,
    retry_on_timeout: bool,
}

/// Archive API response
#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    daily: Option<ArchiveDaily>,
}

#[derive(Debug, Deserialize)]
struct ArchiveDaily {
    temperature_2m_mean: Option<Vec<Option<Decimal>>>,
    precipitation_sum: Option<Vec<Option<Decimal>>>,
    relative_humidity_2m_mean: Option<Vec<Option<Decimal>>>,
}

impl ArchiveDaily {
    /// Zip the three series into per-day samples.
    ///
    /// Series of unequal length are padded with gaps up to the longest one.
    fn into_samples(self) -> AppResult<Vec<WeatherSample>> {
        let temperature = self
            .temperature_2m_mean
            .ok_or_else(|| missing_series("temperature_2m_mean"))?;
        let precipitation = self
            .precipitation_sum
            .ok_or_else(|| missing_series("precipitation_sum"))?;
        let humidity = self
            .relative_humidity_2m_mean
            .ok_or_else(|| missing_series("relative_humidity_2m_mean"))?;

        let days = temperature
            .len()
            .max(precipitation.len())
            .max(humidity.len());

        Ok((0..days)
            .map(|day| {
                WeatherSample::new(
                    value_at(&temperature, day),
                    value_at(&precipitation, day),
                    value_at(&humidity, day),
                )
            })
            .collect())
    }
}

fn value_at(series: &[Option<Decimal>], day: usize) -> Option<Decimal> {
    series.get(day).copied().flatten()
}

fn missing_series(name: &str) -> AppError {
    AppError::MalformedResponse(format!("daily.{} missing from archive response", name))
}

impl ArchiveClient {
    /// Create a client from the weather configuration
    pub fn new(config: &WeatherConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Configuration(format!("Weather HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.archive_url.clone(),
            retry_on_timeout: config.retry_on_timeout,
        })
    }

    /// Fetch the raw archive response, retrying a timed-out request once
    async fn send(&self, coordinates: GpsCoordinates, window: DateRange) -> AppResult<Response> {
        let attempts = if self.retry_on_timeout { 2 } else { 1 };
        let mut attempt = 1;

        loop {
            let result = self
                .client
                .get(&self.base_url)
                .query(&[
                    ("latitude", coordinates.latitude.to_string()),
                    ("longitude", coordinates.longitude.to_string()),
                    ("start_date", window.start.format("%Y-%m-%d").to_string()),
                    ("end_date", window.end.format("%Y-%m-%d").to_string()),
                    ("daily", DAILY_METRICS.join(",")),
                    ("timezone", "auto".to_string()),
                ])
                .send()
                .await;

            match result {
                Ok(response) => return Ok(response),
                Err(e) if e.is_timeout() && attempt < attempts => {
                    tracing::warn!(attempt, "Weather archive request timed out, retrying");
                    attempt += 1;
                }
                Err(e) if e.is_timeout() => {
                    return Err(AppError::UpstreamUnavailable(format!(
                        "Weather archive timed out after {} attempt(s)",
                        attempt
                    )));
                }
                Err(e) => {
                    return Err(AppError::UpstreamUnavailable(format!(
                        "Weather archive request failed: {}",
                        e
                    )));
                }
            }
        }
    }
}

#[async_trait]
impl WeatherArchive for ArchiveClient {
    async fn daily_samples(
        &self,
        coordinates: GpsCoordinates,
        window: DateRange,
    ) -> AppResult<Vec<WeatherSample>> {
        let response = self.send(coordinates, window).await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamUnavailable(format!(
                "Weather archive error: {} - {}",
                status, body
            )));
        }

        let body = response.text().await.map_err(|e| {
            AppError::UpstreamUnavailable(format!("Failed to read archive response: {}", e))
        })?;

        let data: ArchiveResponse = serde_json::from_str(&body).map_err(|e| {
            AppError::MalformedResponse(format!("Failed to parse archive response: {}", e))
        })?;

        data.daily
            .ok_or_else(|| AppError::MalformedResponse("daily missing from archive response".to_string()))?
            .into_samples()
    }
}
