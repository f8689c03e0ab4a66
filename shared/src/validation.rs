//! Validation utilities for the Farmie platform

use rust_decimal::Decimal;

use crate::models::{CropProfile, FarmId};
use crate::types::GpsCoordinates;

/// Longest crop name accepted by the catalog
pub const MAX_CROP_NAME_LENGTH: usize = 100;

/// Longest trailing weather window a farm summary may request
pub const MAX_SUMMARY_DAYS: u32 = 366;

// ============================================================================
// Location Validations
// ============================================================================

/// Validate latitude/longitude are on the globe
pub fn validate_coordinates(coordinates: &GpsCoordinates) -> Result<(), &'static str> {
    if coordinates.latitude < Decimal::from(-90) || coordinates.latitude > Decimal::from(90) {
        return Err("Latitude must be between -90 and 90");
    }
    if coordinates.longitude < Decimal::from(-180) || coordinates.longitude > Decimal::from(180) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate a farm identifier
pub fn validate_farm_id(farm_id: FarmId) -> Result<(), &'static str> {
    if farm_id < 1 {
        return Err("Farm id must be positive");
    }
    Ok(())
}

// ============================================================================
// Crop Validations
// ============================================================================

/// Validate a crop name used as a lookup key
pub fn validate_crop_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Crop name is required");
    }
    if name.chars().count() > MAX_CROP_NAME_LENGTH {
        return Err("Crop name must be at most 100 characters");
    }
    Ok(())
}

/// Validate agronomic targets of a catalog crop
pub fn validate_crop_targets(crop: &CropProfile) -> Result<(), &'static str> {
    if let Some(rainfall) = crop.optimal_rainfall {
        if rainfall < Decimal::ZERO {
            return Err("Optimal rainfall cannot be negative");
        }
    }
    if let Some(humidity) = crop.optimal_humidity {
        if humidity < Decimal::ZERO || humidity > Decimal::from(100) {
            return Err("Optimal humidity must be between 0 and 100%");
        }
    }
    Ok(())
}

// ============================================================================
// Weather Window Validations
// ============================================================================

/// Validate the length of a trailing weather window
pub fn validate_summary_days(days: u32) -> Result<(), &'static str> {
    if days == 0 {
        return Err("Weather window must cover at least one day");
    }
    if days > MAX_SUMMARY_DAYS {
        return Err("Weather window cannot exceed 366 days");
    }
    Ok(())
}
