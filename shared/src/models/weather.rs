//! Weather data models and the daily-sample reducer

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decimal places kept in every summary value
pub const SUMMARY_DECIMAL_PLACES: u32 = 2;

/// One calendar day of archived weather.
///
/// Any field may be missing when the archive has a gap for that day.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeatherSample {
    /// Daily mean temperature at 2m (°C)
    pub mean_temperature: Option<Decimal>,
    /// Daily precipitation sum (mm)
    pub precipitation: Option<Decimal>,
    /// Daily mean relative humidity at 2m (%)
    pub mean_humidity: Option<Decimal>,
}

impl WeatherSample {
    pub fn new(
        mean_temperature: Option<Decimal>,
        precipitation: Option<Decimal>,
        mean_humidity: Option<Decimal>,
    ) -> Self {
        Self {
            mean_temperature,
            precipitation,
            mean_humidity,
        }
    }
}

/// Climate profile of a location over a window of days
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeatherSummary {
    pub average_temperature: Decimal,
    pub total_precipitation: Decimal,
    pub average_humidity: Decimal,
}

impl WeatherSummary {
    pub fn new(
        average_temperature: Decimal,
        total_precipitation: Decimal,
        average_humidity: Decimal,
    ) -> Self {
        Self {
            average_temperature,
            total_precipitation,
            average_humidity,
        }
    }

    /// Reduce daily samples: mean temperature, summed precipitation, mean humidity.
    ///
    /// Missing values are skipped. A metric with no values at all is `0`.
    /// Every output is rounded to [`SUMMARY_DECIMAL_PLACES`].
    pub fn from_samples(samples: &[WeatherSample]) -> Self {
        Self {
            average_temperature: mean_of_present(samples.iter().map(|s| s.mean_temperature)),
            total_precipitation: sum_of_present(samples.iter().map(|s| s.precipitation)),
            average_humidity: mean_of_present(samples.iter().map(|s| s.mean_humidity)),
        }
    }
}

/// Summarize a window of daily samples
pub fn summarize_samples(samples: &[WeatherSample]) -> WeatherSummary {
    WeatherSummary::from_samples(samples)
}

/// Mean daily precipitation over the days that report it
pub fn mean_daily_precipitation(samples: &[WeatherSample]) -> Decimal {
    mean_of_present(samples.iter().map(|s| s.precipitation))
}

// A sum that overflows `Decimal` falls back to zero like an empty metric.

fn mean_of_present(values: impl Iterator<Item = Option<Decimal>>) -> Decimal {
    let mut count = 0u32;
    let sum = values.flatten().try_fold(Decimal::ZERO, |sum, v| {
        count += 1;
        sum.checked_add(v)
    });

    match sum {
        Some(sum) if count > 0 => sum
            .checked_div(Decimal::from(count))
            .map_or(Decimal::ZERO, |mean| mean.round_dp(SUMMARY_DECIMAL_PLACES)),
        _ => Decimal::ZERO,
    }
}

fn sum_of_present(values: impl Iterator<Item = Option<Decimal>>) -> Decimal {
    values
        .flatten()
        .try_fold(Decimal::ZERO, |sum, v| sum.checked_add(v))
        .map_or(Decimal::ZERO, |sum| sum.round_dp(SUMMARY_DECIMAL_PLACES))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn sample(t: Option<&str>, p: Option<&str>, h: Option<&str>) -> WeatherSample {
        WeatherSample::new(t.map(dec), p.map(dec), h.map(dec))
    }

    #[test]
    fn test_means_and_total() {
        let samples = vec![
            sample(Some("24.0"), Some("10.5"), Some("60")),
            sample(Some("26.0"), Some("0.0"), Some("70")),
            sample(Some("25.0"), Some("4.5"), Some("65")),
        ];

        let summary = summarize_samples(&samples);
        assert_eq!(summary.average_temperature, dec("25"));
        assert_eq!(summary.total_precipitation, dec("15"));
        assert_eq!(summary.average_humidity, dec("65"));
    }

    #[test]
    fn test_gaps_are_skipped_not_zeroed() {
        let samples = vec![
            sample(Some("20.0"), None, Some("50")),
            sample(None, Some("3.2"), None),
            sample(Some("30.0"), Some("1.1"), Some("70")),
        ];

        let summary = summarize_samples(&samples);
        // Mean over the two present values, not over three days
        assert_eq!(summary.average_temperature, dec("25"));
        assert_eq!(summary.total_precipitation, dec("4.3"));
        assert_eq!(summary.average_humidity, dec("60"));
    }

    #[test]
    fn test_all_absent_metric_is_zero() {
        let samples = vec![
            sample(None, Some("1.0"), Some("80")),
            sample(None, Some("2.0"), Some("90")),
        ];

        let summary = summarize_samples(&samples);
        assert_eq!(summary.average_temperature, Decimal::ZERO);
        assert_eq!(summary.total_precipitation, dec("3"));
    }

    #[test]
    fn test_empty_window() {
        let summary = summarize_samples(&[]);
        assert_eq!(summary, WeatherSummary::default());
    }

    #[test]
    fn test_rounds_to_two_places() {
        let samples = vec![
            sample(Some("10.0"), Some("0.333"), None),
            sample(Some("10.0"), Some("0.333"), None),
            sample(Some("11.0"), Some("0.333"), None),
        ];

        let summary = summarize_samples(&samples);
        // 31 / 3 = 10.333...
        assert_eq!(summary.average_temperature, dec("10.33"));
        assert_eq!(summary.total_precipitation, dec("1.00"));
    }

    #[test]
    fn test_summary_is_deterministic() {
        let samples = vec![
            sample(Some("17.3"), Some("2.7"), Some("81.4")),
            sample(Some("18.9"), None, Some("77.2")),
        ];
        assert_eq!(summarize_samples(&samples), summarize_samples(&samples));
    }

    #[test]
    fn test_overflowing_metric_falls_back_to_zero() {
        let samples = vec![
            WeatherSample::new(Some(Decimal::MAX), Some(Decimal::MAX), Some(dec("70"))),
            WeatherSample::new(Some(Decimal::MAX), Some(Decimal::MAX), Some(dec("80"))),
        ];

        let summary = summarize_samples(&samples);
        assert_eq!(summary.average_temperature, Decimal::ZERO);
        assert_eq!(summary.total_precipitation, Decimal::ZERO);
        assert_eq!(summary.average_humidity, dec("75"));
    }

    #[test]
    fn test_mean_daily_precipitation() {
        let samples = vec![
            sample(None, Some("3.0"), None),
            sample(None, None, None),
            sample(None, Some("1.0"), None),
        ];
        assert_eq!(mean_daily_precipitation(&samples), dec("2"));
        assert_eq!(mean_daily_precipitation(&[]), Decimal::ZERO);
    }
}
