//! Postgres-backed providers over the Farmie crop, cultivate and farm tables

use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::{
    validate_crop_targets, CropProfile, CultivationRecord, FarmId, FarmLocation, GpsCoordinates,
};
use sqlx::{FromRow, PgPool};

use super::providers::{CropCatalog, CultivationLedger, FarmLocator};
use crate::error::{AppError, AppResult};

/// Read-only access to the farm database
#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct CropRow {
    crop_name: String,
    crop_family: String,
    optimal_temp: Option<Decimal>,
    optimal_rainfall: Option<Decimal>,
    optimal_humidity: Option<Decimal>,
}

impl From<CropRow> for CropProfile {
    fn from(row: CropRow) -> Self {
        CropProfile::new(row.crop_name, row.crop_family).with_targets(
            row.optimal_temp,
            row.optimal_rainfall,
            row.optimal_humidity,
        )
    }
}

#[derive(Debug, FromRow)]
struct CultivateRow {
    farm_id: i64,
    crop_name: String,
    quantity: i64,
}

impl TryFrom<CultivateRow> for CultivationRecord {
    type Error = AppError;

    fn try_from(row: CultivateRow) -> Result<Self, Self::Error> {
        let quantity = u32::try_from(row.quantity).map_err(|_| {
            AppError::Internal(format!(
                "Invalid quantity {} for crop '{}' on farm {}",
                row.quantity, row.crop_name, row.farm_id
            ))
        })?;
        Ok(CultivationRecord::new(row.farm_id, row.crop_name, quantity))
    }
}

#[derive(Debug, FromRow)]
struct FarmRow {
    farm_id: i64,
    latitude: Decimal,
    longitude: Decimal,
}

impl PgStore {
    /// Create a new PgStore instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CropCatalog for PgStore {
    async fn all_crops(&self) -> AppResult<Vec<CropProfile>> {
        let rows = sqlx::query_as::<_, CropRow>(
            r#"
            SELECT crop_name, crop_family,
                   optimal_temp::NUMERIC AS optimal_temp,
                   optimal_rainfall::NUMERIC AS optimal_rainfall,
                   optimal_humidity::NUMERIC AS optimal_humidity
            FROM crop
            ORDER BY crop_name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let crops: Vec<CropProfile> = rows.into_iter().map(CropProfile::from).collect();
        for crop in &crops {
            if let Err(reason) = validate_crop_targets(crop) {
                tracing::warn!(crop = %crop.name, reason, "Catalog crop has implausible targets");
            }
        }

        Ok(crops)
    }
}

#[async_trait]
impl CultivationLedger for PgStore {
    async fn all_records(&self) -> AppResult<Vec<CultivationRecord>> {
        let rows = sqlx::query_as::<_, CultivateRow>(
            r#"
            SELECT farm_id::BIGINT AS farm_id, crop_name, quantity::BIGINT AS quantity
            FROM cultivate
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(CultivationRecord::try_from).collect()
    }
}

#[async_trait]
impl FarmLocator for PgStore {
    async fn locate(&self, farm_id: FarmId) -> AppResult<Option<FarmLocation>> {
        let row = sqlx::query_as::<_, FarmRow>(
            r#"
            SELECT farm_id::BIGINT AS farm_id,
                   latitude::NUMERIC AS latitude,
                   longitude::NUMERIC AS longitude
            FROM farm
            WHERE farm_id = $1
            "#,
        )
        .bind(farm_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(|row| FarmLocation {
            farm_id: row.farm_id,
            coordinates: GpsCoordinates::new(row.latitude, row.longitude),
        }))
    }
}
