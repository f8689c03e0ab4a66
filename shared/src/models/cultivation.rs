//! Cultivation ledger models and system-wide aggregation

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::FarmId;

/// Quantity of one crop planted on one farm
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CultivationRecord {
    pub farm_id: FarmId,
    pub crop_name: String,
    pub quantity: u32,
}

impl CultivationRecord {
    pub fn new(farm_id: FarmId, crop_name: impl Into<String>, quantity: u32) -> Self {
        Self {
            farm_id,
            crop_name: crop_name.into(),
            quantity,
        }
    }
}

/// Planted totals across every farm in the system
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CultivationAggregate {
    pub quantity_by_crop: HashMap<String, u64>,
    /// Crop with the largest planted total, if anything is planted at all
    pub most_cultivated: Option<String>,
}

impl CultivationAggregate {
    /// Planted total for `crop_name`; zero for unknown crops
    pub fn total_for(&self, crop_name: &str) -> u64 {
        self.quantity_by_crop.get(crop_name).copied().unwrap_or(0)
    }

    pub fn is_most_cultivated(&self, crop_name: &str) -> bool {
        self.most_cultivated.as_deref() == Some(crop_name)
    }
}

/// Sum planted quantities per catalog crop and pick the most cultivated one.
///
/// Every crop in `crop_names` gets an entry, zero when nothing is planted.
/// Records naming crops outside the catalog are ignored. On equal totals the
/// crop listed first in `crop_names` wins. When the largest total is zero no
/// crop is most cultivated.
pub fn aggregate_cultivation<'a>(
    crop_names: impl IntoIterator<Item = &'a str>,
    records: &[CultivationRecord],
) -> CultivationAggregate {
    let order: Vec<&str> = crop_names.into_iter().collect();
    let mut quantity_by_crop: HashMap<String, u64> =
        order.iter().map(|name| (name.to_string(), 0)).collect();

    for record in records {
        if let Some(total) = quantity_by_crop.get_mut(&record.crop_name) {
            *total += u64::from(record.quantity);
        }
    }

    let mut most_cultivated: Option<(&str, u64)> = None;
    for &name in &order {
        let total = quantity_by_crop.get(name).copied().unwrap_or(0);
        let leads = match most_cultivated {
            Some((_, best)) => total > best,
            None => total > 0,
        };
        if leads {
            most_cultivated = Some((name, total));
        }
    }

    CultivationAggregate {
        quantity_by_crop,
        most_cultivated: most_cultivated.map(|(name, _)| name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sums_across_farms() {
        let records = vec![
            CultivationRecord::new(1, "corn", 30),
            CultivationRecord::new(2, "corn", 20),
            CultivationRecord::new(2, "banana", 10),
        ];

        let aggregate = aggregate_cultivation(["banana", "corn", "kale"], &records);
        assert_eq!(aggregate.total_for("corn"), 50);
        assert_eq!(aggregate.total_for("banana"), 10);
        assert_eq!(aggregate.total_for("kale"), 0);
        assert_eq!(aggregate.quantity_by_crop.len(), 3);
        assert_eq!(aggregate.most_cultivated.as_deref(), Some("corn"));
    }

    #[test]
    fn test_no_records_means_no_most_cultivated() {
        let aggregate = aggregate_cultivation(["banana", "corn"], &[]);
        assert_eq!(aggregate.most_cultivated, None);
        assert_eq!(aggregate.total_for("banana"), 0);
    }

    #[test]
    fn test_zero_quantities_mean_no_most_cultivated() {
        let records = vec![CultivationRecord::new(1, "corn", 0)];
        let aggregate = aggregate_cultivation(["banana", "corn"], &records);
        assert_eq!(aggregate.most_cultivated, None);
    }

    #[test]
    fn test_tie_goes_to_first_in_corpus_order() {
        let records = vec![
            CultivationRecord::new(1, "kale", 40),
            CultivationRecord::new(2, "corn", 40),
        ];

        let aggregate = aggregate_cultivation(["corn", "kale"], &records);
        assert_eq!(aggregate.most_cultivated.as_deref(), Some("corn"));

        let aggregate = aggregate_cultivation(["kale", "corn"], &records);
        assert_eq!(aggregate.most_cultivated.as_deref(), Some("kale"));
    }

    #[test]
    fn test_unknown_crops_ignored() {
        let records = vec![
            CultivationRecord::new(1, "tobacco", 500),
            CultivationRecord::new(1, "corn", 5),
        ];

        let aggregate = aggregate_cultivation(["corn"], &records);
        assert_eq!(aggregate.most_cultivated.as_deref(), Some("corn"));
        assert_eq!(aggregate.total_for("tobacco"), 0);
    }
}
