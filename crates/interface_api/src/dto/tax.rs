//! Tax-rate DTOs

use core_kernel::Rate;
use domain_inventory::RateSource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct TaxRateResponse {
    pub jurisdiction: String,
    pub rate: Rate,
    pub source: RateSource,
}
