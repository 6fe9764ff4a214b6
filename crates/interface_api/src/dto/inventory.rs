//! Inventory DTOs
//!
//! The compute endpoint takes an `InventoryCase` and returns an
//! `InventoryReport` as-is; only the classification endpoint needs its own
//! shapes.

use core_kernel::{AssetId, Money};
use domain_inventory::{Asset, Classification, PropertyRegime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyAssetRequest {
    pub asset: Asset,
    pub regime: PropertyRegime,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyAssetResponse {
    pub asset_id: AssetId,
    pub regime: PropertyRegime,
    pub classification: Classification,
    /// Value of the decedent's owned fraction
    pub effective_value: Money,
}
