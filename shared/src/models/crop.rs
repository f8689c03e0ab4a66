//! Crop catalog models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A crop from the catalog together with its agronomic targets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropProfile {
    /// Unique crop name (catalog key)
    pub name: String,
    /// Taxonomic family, e.g. "Solanaceae"
    pub family: String,
    /// Optimal mean temperature (°C)
    pub optimal_temperature: Option<Decimal>,
    /// Optimal rainfall over the growing year (mm)
    pub optimal_rainfall: Option<Decimal>,
    /// Optimal mean relative humidity (%)
    pub optimal_humidity: Option<Decimal>,
}

impl CropProfile {
    /// Crop with no agronomic targets recorded
    pub fn new(name: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            family: family.into(),
            optimal_temperature: None,
            optimal_rainfall: None,
            optimal_humidity: None,
        }
    }

    pub fn with_targets(
        mut self,
        temperature: Option<Decimal>,
        rainfall: Option<Decimal>,
        humidity: Option<Decimal>,
    ) -> Self {
        self.optimal_temperature = temperature;
        self.optimal_rainfall = rainfall;
        self.optimal_humidity = humidity;
        self
    }

    pub fn same_family(&self, family: &str) -> bool {
        self.family == family
    }
}

/// Find a crop by its catalog name
pub fn find_crop<'a>(corpus: &'a [CropProfile], name: &str) -> Option<&'a CropProfile> {
    corpus.iter().find(|c| c.name == name)
}
