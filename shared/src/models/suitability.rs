//! Crop suitability scoring
//!
//! A linear-penalty model over four factors. Each factor starts at its
//! maximum weight and loses one point per unit of distance between the
//! crop's optimum and the observed climate, floored at zero.
//!
//! | factor      | max | distance unit |
//! |-------------|-----|---------------|
//! | family      | 20  | exact match   |
//! | temperature | 30  | °C            |
//! | rainfall    | 30  | mm            |
//! | humidity    | 20  | %             |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CropProfile, WeatherSummary};

pub const FAMILY_MATCH_POINTS: u32 = 20;
pub const TEMPERATURE_MAX_POINTS: u32 = 30;
pub const RAINFALL_MAX_POINTS: u32 = 30;
pub const HUMIDITY_MAX_POINTS: u32 = 20;

/// Decimal places kept in a total score
pub const SCORE_DECIMAL_PLACES: u32 = 2;

/// Per-factor contributions to a suitability score
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub family: Decimal,
    pub temperature: Decimal,
    pub rainfall: Decimal,
    pub humidity: Decimal,
    /// Sum of the four factors, rounded to two places
    pub total: Decimal,
}

impl CropProfile {
    /// Score this crop against a reference family and a local climate
    pub fn suitability(&self, reference_family: &str, weather: &WeatherSummary) -> ScoreBreakdown {
        let family = if self.same_family(reference_family) {
            Decimal::from(FAMILY_MATCH_POINTS)
        } else {
            Decimal::ZERO
        };
        let temperature = fit(
            self.optimal_temperature,
            weather.average_temperature,
            TEMPERATURE_MAX_POINTS,
        );
        let rainfall = fit(
            self.optimal_rainfall,
            weather.total_precipitation,
            RAINFALL_MAX_POINTS,
        );
        let humidity = fit(
            self.optimal_humidity,
            weather.average_humidity,
            HUMIDITY_MAX_POINTS,
        );

        ScoreBreakdown {
            family,
            temperature,
            rainfall,
            humidity,
            total: (family + temperature + rainfall + humidity).round_dp(SCORE_DECIMAL_PLACES),
        }
    }
}

/// `max(0, max_points - |target - observed|)`, or zero without a target.
///
/// A distance too large to represent contributes nothing.
fn fit(target: Option<Decimal>, observed: Decimal, max_points: u32) -> Decimal {
    target
        .and_then(|target| target.checked_sub(observed))
        .and_then(|distance| Decimal::from(max_points).checked_sub(distance.abs()))
        .map_or(Decimal::ZERO, |points| points.max(Decimal::ZERO))
}

/// Total suitability score of `candidate`
pub fn score_crop(
    candidate: &CropProfile,
    reference_family: &str,
    weather: &WeatherSummary,
) -> Decimal {
    candidate.suitability(reference_family, weather).total
}
