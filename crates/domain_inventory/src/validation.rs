//! Boundary validation of an inventory case
//!
//! Runs before any computation. Errors are contract violations and abort the
//! run; warnings are reported in the narrative log and the run continues.
//!
//! # Errors
//! - No decedent, or a duplicated decedent id
//! - Heir, asset or debt pointing at an unknown decedent
//! - Negative asset value or debt amount, or one above [`MAX_AMOUNT`]
//! - Ownership fraction outside (0, 1]
//! - Will percentage outside [0, 1], or above 100% in total over a
//!   decedent's living heirs
//! - Money in a currency other than the case currency
//! - Tax-rate override outside [0, 1]
//!
//! # Warnings
//! - Decedent without declared heirs
//! - Asset with a lien but no linked debt
//! - Custom partition entry naming an unknown heir or asset

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::{BTreeMap, BTreeSet};

use core_kernel::{Money, PersonId};

use crate::error::InventoryError;
use crate::model::InventoryCase;

/// Largest asset value or debt amount a case may declare
///
/// Keeps every sum and product the engine forms inside `Decimal` range.
pub const MAX_AMOUNT: Decimal = dec!(1_000_000_000_000_000);

/// Result of case validation
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Hard errors
    pub errors: Vec<InventoryError>,
    /// Non-fatal findings
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: InventoryError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// First error, or the warnings when the case is valid
    pub fn into_result(self) -> Result<Vec<String>, InventoryError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(self.warnings),
        }
    }
}

/// Validator for inventory cases
pub struct InventoryValidator;

impl InventoryValidator {
    /// Validates a whole case
    ///
    /// # Arguments
    ///
    /// * `case` - The case to validate
    ///
    /// # Returns
    ///
    /// A `ValidationResult` with every error and warning found
    pub fn validate(case: &InventoryCase) -> ValidationResult {
        let mut result = ValidationResult::ok();

        Self::validate_decedents(case, &mut result);
        Self::validate_heirs(case, &mut result);
        Self::validate_assets(case, &mut result);
        Self::validate_debts(case, &mut result);
        Self::validate_overrides(case, &mut result);
        Self::validate_partition(case, &mut result);

        result
    }

    fn validate_decedents(case: &InventoryCase, result: &mut ValidationResult) {
        if case.decedents.is_empty() {
            result.add_error(InventoryError::NoDecedents);
            return;
        }

        let mut seen = BTreeSet::new();
        for decedent in &case.decedents {
            if !seen.insert(decedent.id) {
                result.add_error(InventoryError::DuplicateDecedent(decedent.id.to_string()));
            }
            if case.heirs_of(decedent.id).is_empty() {
                result.add_warning(format!("Decedent {} has no declared heirs", decedent.name));
            }
        }
    }

    fn validate_heirs(case: &InventoryCase, result: &mut ValidationResult) {
        let mut will_totals: BTreeMap<PersonId, Decimal> = BTreeMap::new();

        for heir in &case.heirs {
            if !case.is_decedent(heir.decedent_id) {
                result.add_error(InventoryError::unknown_decedent("heir", heir.id, heir.decedent_id));
            }
            if let Some(percentage) = heir.will_percentage {
                if percentage < Decimal::ZERO || percentage > dec!(1) {
                    result.add_error(InventoryError::InvalidWillPercentage {
                        heir: heir.id.to_string(),
                        percentage,
                    });
                }
                // A predeceased beneficiary's share lapses
                if !heir.predeceased {
                    *will_totals.entry(heir.decedent_id).or_insert(Decimal::ZERO) += percentage;
                }
            }
        }

        for (decedent, total) in will_totals {
            if total > dec!(1) {
                result.add_error(InventoryError::WillOverAllocated {
                    decedent: decedent.to_string(),
                    total,
                });
            }
        }
    }

    fn validate_assets(case: &InventoryCase, result: &mut ValidationResult) {
        for asset in &case.assets {
            if !case.is_decedent(asset.decedent_id) {
                result.add_error(InventoryError::unknown_decedent("asset", asset.id, asset.decedent_id));
            }
            Self::check_currency(case, &asset.value, result);
            if asset.value.is_negative() {
                result.add_error(InventoryError::invalid_asset(asset.id, "negative value"));
            } else if asset.value.amount() > MAX_AMOUNT {
                result.add_error(InventoryError::invalid_asset(
                    asset.id,
                    format!("value above the {} ceiling", MAX_AMOUNT),
                ));
            }
            if asset.ownership_fraction <= Decimal::ZERO || asset.ownership_fraction > dec!(1) {
                result.add_error(InventoryError::invalid_asset(
                    asset.id,
                    format!("ownership fraction {} outside (0, 1]", asset.ownership_fraction),
                ));
            }
            if asset.has_lien && asset.linked_debts.is_empty() {
                result.add_warning(format!(
                    "Asset '{}' has a lien but no linked debt",
                    asset.description
                ));
            }
        }
    }

    fn validate_debts(case: &InventoryCase, result: &mut ValidationResult) {
        for debt in &case.debts {
            if !case.is_decedent(debt.decedent_id) {
                result.add_error(InventoryError::unknown_decedent("debt", debt.id, debt.decedent_id));
            }
            Self::check_currency(case, &debt.amount, result);
            if debt.amount.is_negative() {
                result.add_error(InventoryError::InvalidDebt {
                    debt: debt.id.to_string(),
                    reason: "negative amount".to_string(),
                });
            } else if debt.amount.amount() > MAX_AMOUNT {
                result.add_error(InventoryError::InvalidDebt {
                    debt: debt.id.to_string(),
                    reason: format!("amount above the {} ceiling", MAX_AMOUNT),
                });
            }
        }
    }

    fn validate_overrides(case: &InventoryCase, result: &mut ValidationResult) {
        for (jurisdiction, rate) in &case.tax_rate_overrides {
            if *rate < Decimal::ZERO || *rate > dec!(1) {
                result.add_error(InventoryError::InvalidTaxRate {
                    jurisdiction: jurisdiction.clone(),
                    rate: *rate,
                });
            }
        }
    }

    fn validate_partition(case: &InventoryCase, result: &mut ValidationResult) {
        for (heir_id, asset_id) in &case.custom_partition {
            if !case.heirs.iter().any(|h| h.id == *heir_id) {
                result.add_warning(format!("Custom partition names unknown heir {}", heir_id));
            }
            if !case.assets.iter().any(|a| a.id == *asset_id) {
                result.add_warning(format!("Custom partition names unknown asset {}", asset_id));
            }
        }
    }

    fn check_currency(case: &InventoryCase, money: &Money, result: &mut ValidationResult) {
        if money.currency() != case.currency {
            result.add_error(InventoryError::CurrencyMismatch {
                expected: case.currency.to_string(),
                actual: money.currency().to_string(),
            });
        }
    }
}

/// Validates a case, failing on the first error
pub fn validate_case(case: &InventoryCase) -> Result<(), InventoryError> {
    InventoryValidator::validate(case).into_result().map(|_| ())
}
