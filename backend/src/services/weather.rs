//! Weather service: turns archived daily weather into a climate summary

use std::sync::Arc;

use serde::Serialize;
use rust_decimal::Decimal;
use shared::{
    mean_daily_precipitation, validate_coordinates, DateRange, FarmId, FarmLocation,
    GpsCoordinates, WeatherSummary,
};

use super::providers::FarmLocator;
use crate::error::{AppError, AppResult};
use crate::external::weather::WeatherArchive;

/// Weather service for summarizing a location's climate
#[derive(Clone)]
pub struct WeatherService {
    archive: Arc<dyn WeatherArchive>,
    farms: Arc<dyn FarmLocator>,
}

/// Climate summary of one farm over a window
#[derive(Debug, Clone, Serialize)]
pub struct FarmWeatherSummary {
    pub farm: FarmLocation,
    pub window: DateRange,
    pub summary: WeatherSummary,
    /// Mean of the daily precipitation sums (mm/day)
    pub average_rainfall: Decimal,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(archive: Arc<dyn WeatherArchive>, farms: Arc<dyn FarmLocator>) -> Self {
        Self { archive, farms }
    }

    /// Fetch daily weather for `window` and reduce it to a summary
    pub async fn summarize(
        &self,
        coordinates: GpsCoordinates,
        window: DateRange,
    ) -> AppResult<WeatherSummary> {
        let samples = self.archive.daily_samples(coordinates, window).await?;
        let summary = WeatherSummary::from_samples(&samples);

        tracing::debug!(
            %coordinates,
            %window,
            requested_days = window.num_days(),
            returned_days = samples.len(),
            ?summary,
            "Weather summarized"
        );

        Ok(summary)
    }

    /// Resolve a farm's location, rejecting unknown farms and unusable coordinates
    pub async fn locate_farm(&self, farm_id: FarmId) -> AppResult<FarmLocation> {
        let farm = self
            .farms
            .locate(farm_id)
            .await?
            .ok_or(AppError::FarmNotFound(farm_id))?;

        if let Err(reason) = validate_coordinates(&farm.coordinates) {
            tracing::warn!(farm_id, coordinates = %farm.coordinates, reason, "Farm has unusable coordinates");
            return Err(AppError::FarmNotFound(farm_id));
        }

        Ok(farm)
    }

    /// Summarize the weather at a farm over `window`
    pub async fn summarize_farm(
        &self,
        farm_id: FarmId,
        window: DateRange,
    ) -> AppResult<FarmWeatherSummary> {
        let farm = self.locate_farm(farm_id).await?;
        let samples = self.archive.daily_samples(farm.coordinates, window).await?;
        let summary = WeatherSummary::from_samples(&samples);
        let average_rainfall = mean_daily_precipitation(&samples);

        tracing::debug!(farm_id, %window, ?summary, %average_rainfall, "Farm weather summarized");

        Ok(FarmWeatherSummary {
            farm,
            window,
            summary,
            average_rainfall,
        })
    }
}
