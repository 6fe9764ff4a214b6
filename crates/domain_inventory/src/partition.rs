//! Suggested partition of the net inheritance
//!
//! By default every heir receives an ideal fraction of the whole estate. A
//! custom partition assigns a specific asset to an heir instead, with a cash
//! adjustment (torna) that balances the asset against the heir's quota.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::{AssetId, Money, PersonId};

use crate::error::InventoryError;
use crate::model::Asset;
use crate::quota::Quota;

/// What an heir receives in the partition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum PartitionShare {
    /// Undivided fraction of the whole estate
    IdealQuota { value: Money, percentage: Decimal },
    /// A specific asset plus a cash adjustment
    ///
    /// `cash_adjustment = quota - asset_value`: positive when the heir
    /// receives cash, negative when the heir pays into the estate.
    SpecificAsset {
        asset_id: AssetId,
        asset_value: Money,
        cash_adjustment: Money,
    },
}

/// One heir's line in the suggested partition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionEntry {
    pub heir_id: PersonId,
    pub heir_name: String,
    pub share: PartitionShare,
}

/// Builds the partition for one decedent
///
/// Custom assignments pointing at an asset that does not belong to this
/// decedent are ignored and the heir keeps an ideal quota.
pub fn suggest_partition(
    quotas: &[Quota],
    assets: &[&Asset],
    custom: &BTreeMap<PersonId, AssetId>,
) -> Result<Vec<PartitionEntry>, InventoryError> {
    quotas
        .iter()
        .map(|quota| -> Result<PartitionEntry, InventoryError> {
            let assigned = custom
                .get(&quota.heir_id)
                .and_then(|asset_id| assets.iter().find(|a| a.id == *asset_id));

            let share = match assigned {
                Some(asset) => {
                    let asset_value = asset.effective_value();
                    PartitionShare::SpecificAsset {
                        asset_id: asset.id,
                        asset_value,
                        cash_adjustment: quota.value.checked_sub(&asset_value)?,
                    }
                }
                None => PartitionShare::IdealQuota {
                    value: quota.value,
                    percentage: quota.percentage,
                },
            };

            Ok(PartitionEntry {
                heir_id: quota.heir_id,
                heir_name: quota.heir_name.clone(),
                share,
            })
        })
        .collect()
}
