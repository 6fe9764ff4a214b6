//! Inventory domain errors
//!
//! Hard failures only. Domain "soft" outcomes (vacant estate, clamped
//! negative balance, unknown jurisdiction) are reported through alerts and
//! the narrative log instead.

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::MoneyError;

/// Errors that can occur in the inventory domain
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Case contains no decedent
    #[error("Inventory case has no decedents")]
    NoDecedents,

    /// The same decedent id appears twice
    #[error("Duplicate decedent: {0}")]
    DuplicateDecedent(String),

    /// An heir, asset or debt points at a decedent not in the case
    #[error("{entity} {id} references unknown decedent {decedent}")]
    UnknownDecedent {
        entity: &'static str,
        id: String,
        decedent: String,
    },

    /// Asset with a negative value or an ownership fraction outside (0, 1]
    #[error("Invalid asset {asset}: {reason}")]
    InvalidAsset { asset: String, reason: String },

    /// Debt with a negative amount
    #[error("Invalid debt {debt}: {reason}")]
    InvalidDebt { debt: String, reason: String },

    /// Will percentage outside [0, 1]
    #[error("Invalid will percentage {percentage} for heir {heir}")]
    InvalidWillPercentage { heir: String, percentage: Decimal },

    /// Will percentages of one decedent add up to more than 100%
    #[error("Will percentages for decedent {decedent} sum to {total}, exceeding 100%")]
    WillOverAllocated { decedent: String, total: Decimal },

    /// Tax-rate override outside [0, 1]
    #[error("Invalid tax rate {rate} for jurisdiction {jurisdiction}")]
    InvalidTaxRate { jurisdiction: String, rate: Decimal },

    /// Money in a currency other than the case currency
    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch { expected: String, actual: String },

    /// Financial calculation error
    #[error("Financial error: {0}")]
    Financial(#[from] MoneyError),

    /// Generic validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl InventoryError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        InventoryError::Validation(message.into())
    }

    /// Creates an unknown-decedent error
    pub fn unknown_decedent(
        entity: &'static str,
        id: impl std::fmt::Display,
        decedent: impl std::fmt::Display,
    ) -> Self {
        InventoryError::UnknownDecedent {
            entity,
            id: id.to_string(),
            decedent: decedent.to_string(),
        }
    }

    /// Creates an invalid-asset error
    pub fn invalid_asset(asset: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        InventoryError::InvalidAsset {
            asset: asset.to_string(),
            reason: reason.into(),
        }
    }

    /// True for errors raised by boundary validation
    pub fn is_validation(&self) -> bool {
        !matches!(self, InventoryError::Financial(_))
    }
}
