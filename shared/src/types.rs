//! Common types used across the platform

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for GpsCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Errors raised when building a [`DateRange`]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("start date {start} is after end date {end}")]
    Inverted { start: NaiveDate, end: NaiveDate },

    #[error("year {0} is out of range")]
    InvalidYear(i32),

    #[error("a trailing window needs at least one day")]
    EmptyWindow,
}

/// Inclusive calendar window `[start, end]`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// January 1st through December 31st of `year`
    pub fn calendar_year(year: i32) -> Result<Self, DateRangeError> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(DateRangeError::InvalidYear(year))?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(DateRangeError::InvalidYear(year))?;
        Self::new(start, end)
    }

    /// From `days` days before `end` through `end` itself, so `days + 1` dates.
    pub fn trailing_days(end: NaiveDate, days: u32) -> Result<Self, DateRangeError> {
        if days == 0 {
            return Err(DateRangeError::EmptyWindow);
        }
        let start = end - Duration::days(i64::from(days));
        Self::new(start, end)
    }

    /// Number of calendar days covered, both ends included
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
