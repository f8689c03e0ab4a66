//! Data providers the recommendation engine reads from
//!
//! The engine never writes through these; catalog, ledger and farm data are
//! maintained elsewhere.

use async_trait::async_trait;
use shared::{CropProfile, CultivationRecord, FarmId, FarmLocation};

use crate::error::AppResult;

/// The full crop catalog, in a stable order
#[async_trait]
pub trait CropCatalog: Send + Sync {
    async fn all_crops(&self) -> AppResult<Vec<CropProfile>>;
}

/// Every planting record of every farm
#[async_trait]
pub trait CultivationLedger: Send + Sync {
    async fn all_records(&self) -> AppResult<Vec<CultivationRecord>>;
}

/// Resolves farms to their coordinates
#[async_trait]
pub trait FarmLocator: Send + Sync {
    /// `None` when no such farm exists
    async fn locate(&self, farm_id: FarmId) -> AppResult<Option<FarmLocation>>;
}
