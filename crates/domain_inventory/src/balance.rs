//! Estate balance and marital share
//!
//! The monte-mor is built from the decedent's share of each asset plus any
//! amount inherited earlier in a death chain. Debts are deducted and the
//! result floored at zero. The surviving spouse's marital share is then
//! carved out of the community bucket *before* anything is treated as
//! inheritance.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use core_kernel::{Currency, Money};

use crate::classification::ClassifiedAsset;
use crate::error::InventoryError;
use crate::model::{Asset, Debt, PropertyRegime};

/// Monetary totals of one estate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstateBalance {
    /// Sum of the decedent's share of every asset
    pub asset_total: Money,
    /// Amount received from an earlier decedent in a death chain
    pub inherited_amount: Money,
    /// Monte-mor: `asset_total + inherited_amount`
    pub gross_assets: Money,
    pub total_debts: Money,
    /// `max(0, gross_assets - total_debts)`
    pub net_estate: Money,
    /// Debts exceeded assets and the balance was floored at zero
    pub clamped: bool,
}

/// Computes the gross and net estate of one decedent
///
/// Negative balances are floored at zero and flagged via `clamped`; the
/// shortfall is not carried anywhere.
pub fn calculate_balance<'a, A, D>(
    assets: A,
    debts: D,
    inherited_amount: Money,
    currency: Currency,
) -> Result<EstateBalance, InventoryError>
where
    A: IntoIterator<Item = &'a Asset>,
    D: IntoIterator<Item = &'a Debt>,
{
    let asset_values: Vec<Money> = assets.into_iter().map(Asset::effective_value).collect();
    let asset_total = Money::try_sum(currency, &asset_values)?;

    let debt_amounts: Vec<Money> = debts.into_iter().map(|d| d.amount).collect();
    let total_debts = Money::try_sum(currency, &debt_amounts)?;

    let gross_assets = asset_total.checked_add(&inherited_amount)?;
    let balance = gross_assets.checked_sub(&total_debts)?;
    let clamped = balance.is_negative();
    if clamped {
        warn!(%gross_assets, %total_debts, "Debts exceed assets, net estate floored at zero");
    }

    Ok(EstateBalance {
        asset_total,
        inherited_amount,
        gross_assets,
        total_debts,
        net_estate: balance.floor_zero(),
        clamped,
    })
}

/// Marital share carved out of the net estate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaritalShare {
    /// Sum of the decedent's share of every community asset
    pub community_total: Money,
    /// Half of `community_total`, or zero when no spouse qualifies
    pub marital_share: Money,
    /// `max(0, net_estate - marital_share)`
    pub net_inheritance: Money,
}

/// Computes the surviving spouse's marital share (meação)
///
/// Zero when no qualifying spouse or partner survives, and under either
/// separation regime.
pub fn calculate_marital_share(
    community: &[ClassifiedAsset],
    regime: PropertyRegime,
    has_qualifying_spouse: bool,
    net_estate: Money,
) -> Result<MaritalShare, InventoryError> {
    let currency = net_estate.currency();
    let values: Vec<Money> = community.iter().map(|c| c.asset.effective_value()).collect();
    let community_total = Money::try_sum(currency, &values)?;

    let marital_share = if !has_qualifying_spouse || regime.is_separation() {
        Money::zero(currency)
    } else {
        community_total.divide(dec!(2))?
    };

    let net_inheritance = net_estate.checked_sub(&marital_share)?.floor_zero();

    Ok(MaritalShare {
        community_total,
        marital_share,
        net_inheritance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::Classification;
    use crate::model::{AcquisitionOrigin, AssetCategory};
    use core_kernel::{AssetId, DebtId, PersonId};

    fn asset(value: rust_decimal::Decimal, fraction: rust_decimal::Decimal) -> Asset {
        Asset {
            id: AssetId::new(),
            decedent_id: PersonId::new(),
            description: "Land".to_string(),
            category: AssetCategory::UrbanRealEstate,
            value: Money::new(value, Currency::BRL),
            ownership_fraction: fraction,
            origin: AcquisitionOrigin::DuringMarriage,
            acquired_before_marriage: None,
            incommunicability_clause: false,
            has_lien: false,
            linked_debts: vec![],
        }
    }

    fn debt(amount: rust_decimal::Decimal) -> Debt {
        Debt {
            id: DebtId::new(),
            decedent_id: PersonId::new(),
            description: "Loan".to_string(),
            amount: Money::new(amount, Currency::BRL),
        }
    }

    #[test]
    fn test_balance_includes_inherited_amount() {
        let assets = vec![asset(dec!(100000), dec!(0.5))];
        let debts = vec![debt(dec!(10000))];
        let inherited = Money::new(dec!(20000), Currency::BRL);

        let balance = calculate_balance(&assets, &debts, inherited, Currency::BRL).unwrap();
        assert_eq!(balance.gross_assets.amount(), dec!(70000));
        assert_eq!(balance.net_estate.amount(), dec!(60000));
        assert!(!balance.clamped);
    }

    #[test]
    fn test_negative_balance_is_clamped() {
        let assets = vec![asset(dec!(1000), dec!(1))];
        let debts = vec![debt(dec!(5000))];

        let balance = calculate_balance(&assets, &debts, Money::zero(Currency::BRL), Currency::BRL).unwrap();
        assert!(balance.net_estate.is_zero());
        assert!(balance.clamped);
    }

    #[test]
    fn test_marital_share_is_half_of_community() {
        let community = vec![ClassifiedAsset {
            asset: asset(dec!(200000), dec!(1)),
            classification: Classification::Community,
        }];
        let net = Money::new(dec!(200000), Currency::BRL);

        let share = calculate_marital_share(&community, PropertyRegime::PartialCommunity, true, net).unwrap();
        assert_eq!(share.marital_share.amount(), dec!(100000));
        assert_eq!(share.net_inheritance.amount(), dec!(100000));
    }

    #[test]
    fn test_no_marital_share_without_spouse() {
        let community = vec![ClassifiedAsset {
            asset: asset(dec!(200000), dec!(1)),
            classification: Classification::Community,
        }];
        let net = Money::new(dec!(200000), Currency::BRL);

        let share = calculate_marital_share(&community, PropertyRegime::PartialCommunity, false, net).unwrap();
        assert!(share.marital_share.is_zero());
        assert_eq!(share.net_inheritance, net);
    }
}
