//! Crop recommendation ranking

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CropProfile, CultivationAggregate, FarmLocation, WeatherSummary};
use crate::types::DateRange;

/// Number of crops in a recommendation unless configured otherwise
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 3;

/// Suitability of one catalog crop for the farm under evaluation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropScore {
    pub crop_name: String,
    pub score: Decimal,
    /// Planted quantity of this crop across all farms
    pub total_quantity: u64,
}

/// Score every crop of the corpus, keeping corpus order
pub fn score_corpus(
    corpus: &[CropProfile],
    reference_family: &str,
    weather: &WeatherSummary,
    cultivation: &CultivationAggregate,
) -> Vec<CropScore> {
    corpus
        .iter()
        .map(|crop| CropScore {
            crop_name: crop.name.clone(),
            score: crop.suitability(reference_family, weather).total,
            total_quantity: cultivation.total_for(&crop.name),
        })
        .collect()
}

/// Order candidates for recommendation.
///
/// The reference crop and the most cultivated crop are dropped outright,
/// whatever they scored. The rest are sorted by score, highest first; equal
/// scores keep their input order.
pub fn rank_candidates(
    scores: Vec<CropScore>,
    reference_crop: &str,
    most_cultivated: Option<&str>,
) -> Vec<CropScore> {
    let mut ranked: Vec<CropScore> = scores
        .into_iter()
        .filter(|s| s.crop_name != reference_crop)
        .filter(|s| most_cultivated != Some(s.crop_name.as_str()))
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Names of the best `limit` candidates
pub fn rank_recommendations(
    scores: Vec<CropScore>,
    reference_crop: &str,
    most_cultivated: Option<&str>,
    limit: usize,
) -> Vec<String> {
    rank_candidates(scores, reference_crop, most_cultivated)
        .into_iter()
        .take(limit)
        .map(|s| s.crop_name)
        .collect()
}

/// Everything that went into one recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationReport {
    pub reference_crop: String,
    pub reference_family: String,
    pub farm: FarmLocation,
    pub window: DateRange,
    pub weather: WeatherSummary,
    pub most_cultivated: Option<String>,
    /// Eligible candidates, best first
    pub ranked: Vec<CropScore>,
    pub recommendations: Vec<String>,
}

/// Response body of the recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationList {
    pub recommendations: Vec<String>,
}

impl From<RecommendationReport> for RecommendationList {
    fn from(report: RecommendationReport) -> Self {
        Self {
            recommendations: report.recommendations,
        }
    }
}
