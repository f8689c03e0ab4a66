//! Farm models

use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// Farm identifier as stored in the farm table
pub type FarmId = i64;

/// Where a farm is, as resolved by the farm locator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FarmLocation {
    pub farm_id: FarmId,
    pub coordinates: GpsCoordinates,
}
