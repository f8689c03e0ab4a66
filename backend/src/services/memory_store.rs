//! In-memory providers for tests and local demos

use std::collections::HashMap;

use async_trait::async_trait;
use shared::{CropProfile, CultivationRecord, FarmId, FarmLocation, GpsCoordinates};

use super::providers::{CropCatalog, CultivationLedger, FarmLocator};
use crate::error::AppResult;

/// Fixed catalog, ledger and farm set held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    crops: Vec<CropProfile>,
    records: Vec<CultivationRecord>,
    farms: HashMap<FarmId, GpsCoordinates>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_crop(mut self, crop: CropProfile) -> Self {
        self.crops.push(crop);
        self
    }

    pub fn with_record(mut self, record: CultivationRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn with_farm(mut self, farm_id: FarmId, coordinates: GpsCoordinates) -> Self {
        self.farms.insert(farm_id, coordinates);
        self
    }
}

#[async_trait]
impl CropCatalog for InMemoryStore {
    async fn all_crops(&self) -> AppResult<Vec<CropProfile>> {
        Ok(self.crops.clone())
    }
}

#[async_trait]
impl CultivationLedger for InMemoryStore {
    async fn all_records(&self) -> AppResult<Vec<CultivationRecord>> {
        Ok(self.records.clone())
    }
}

#[async_trait]
impl FarmLocator for InMemoryStore {
    async fn locate(&self, farm_id: FarmId) -> AppResult<Option<FarmLocation>> {
        Ok(self.farms.get(&farm_id).map(|coordinates| FarmLocation {
            farm_id,
            coordinates: *coordinates,
        }))
    }
}
