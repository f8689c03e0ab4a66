//! Crop recommendation service
//!
//! Orchestrates one recommendation: catalog and farm lookups first, then the
//! weather fetch and the cultivation aggregation side by side, then scoring
//! and ranking. Nothing is shared between requests apart from the providers.

use std::sync::Arc;

use shared::{
    aggregate_cultivation, find_crop, rank_candidates, score_corpus, CultivationAggregate,
    DateRange, FarmId, RecommendationReport,
};

use super::providers::{CropCatalog, CultivationLedger};
use super::weather::WeatherService;
use crate::config::RecommendationConfig;
use crate::error::{AppError, AppResult};

/// Recommends alternative crops for a farm
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<dyn CropCatalog>,
    ledger: Arc<dyn CultivationLedger>,
    weather: WeatherService,
    window: DateRange,
    max_results: usize,
}

impl RecommendationService {
    /// Create a new RecommendationService instance
    pub fn new(
        catalog: Arc<dyn CropCatalog>,
        ledger: Arc<dyn CultivationLedger>,
        weather: WeatherService,
        config: &RecommendationConfig,
    ) -> AppResult<Self> {
        let window = DateRange::calendar_year(config.reference_year)
            .map_err(|e| AppError::Configuration(format!("recommendation.reference_year: {}", e)))?;

        if config.max_results == 0 {
            return Err(AppError::Configuration(
                "recommendation.max_results must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            catalog,
            ledger,
            weather,
            window,
            max_results: config.max_results,
        })
    }

    /// Weather window used to characterize a farm's climate
    pub fn window(&self) -> DateRange {
        self.window
    }

    /// Recommended crop names, best first
    pub async fn recommend(&self, reference_crop: &str, farm_id: FarmId) -> AppResult<Vec<String>> {
        Ok(self.evaluate(reference_crop, farm_id).await?.recommendations)
    }

    /// Full recommendation over the configured reference window
    pub async fn evaluate(
        &self,
        reference_crop: &str,
        farm_id: FarmId,
    ) -> AppResult<RecommendationReport> {
        self.evaluate_window(reference_crop, farm_id, self.window).await
    }

    /// Full recommendation over an explicit weather window
    pub async fn evaluate_window(
        &self,
        reference_crop: &str,
        farm_id: FarmId,
        window: DateRange,
    ) -> AppResult<RecommendationReport> {
        // Lookups fail fast, before any request goes to the weather archive
        let corpus = self.catalog.all_crops().await?;
        let reference_family = find_crop(&corpus, reference_crop)
            .map(|crop| crop.family.clone())
            .ok_or_else(|| AppError::CropNotFound(reference_crop.to_string()))?;
        let farm = self.weather.locate_farm(farm_id).await?;

        tracing::info!(
            reference_crop,
            reference_family = %reference_family,
            farm_id,
            %window,
            "Evaluating crop recommendation"
        );

        let cultivation = async {
            let records = self.ledger.all_records().await?;
            Ok::<CultivationAggregate, AppError>(aggregate_cultivation(
                corpus.iter().map(|crop| crop.name.as_str()),
                &records,
            ))
        };
        let (weather, cultivation) = tokio::try_join!(
            self.weather.summarize(farm.coordinates, window),
            cultivation
        )?;

        tracing::debug!(most_cultivated = ?cultivation.most_cultivated, "Cultivation aggregated");

        let scores = score_corpus(&corpus, &reference_family, &weather, &cultivation);
        let ranked = rank_candidates(scores, reference_crop, cultivation.most_cultivated.as_deref());
        let recommendations: Vec<String> = ranked
            .iter()
            .take(self.max_results)
            .map(|score| score.crop_name.clone())
            .collect();

        tracing::debug!(?recommendations, candidates = ranked.len(), "Recommendation ranked");

        Ok(RecommendationReport {
            reference_crop: reference_crop.to_string(),
            reference_family,
            farm,
            window,
            weather,
            most_cultivated: cultivation.most_cultivated,
            ranked,
            recommendations,
        })
    }
}
