//! Quota allocation and transfer tax
//!
//! The net inheritance is split equally between the effective heirs, except
//! for heirs carrying a will percentage, whose quota is that percentage of
//! the net inheritance. Each quota is then taxed at the jurisdiction rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money, PersonId, Rate};

use crate::error::InventoryError;
use crate::model::{Heir, Kinship};

/// How a quota was computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "percentage")]
pub enum QuotaBasis {
    /// Net inheritance divided by heir count
    EqualShare,
    /// Testamentary percentage of the net inheritance
    Will(Decimal),
}

/// One heir's share (quinhão) of a decedent's net inheritance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quota {
    pub heir_id: PersonId,
    pub heir_name: String,
    pub kinship: Kinship,
    pub value: Money,
    /// `value / net_inheritance`, zero when the net inheritance is zero
    pub percentage: Decimal,
    pub tax: Money,
    pub basis: QuotaBasis,
}

/// Allocates the net inheritance among the effective heirs
///
/// Returns an empty list when there are no heirs (vacant estate).
pub fn allocate_quotas(
    net_inheritance: Money,
    heirs: &[Heir],
    tax_rate: Rate,
) -> Result<Vec<Quota>, InventoryError> {
    if heirs.is_empty() {
        return Ok(Vec::new());
    }

    let equal_share = net_inheritance.divide(Decimal::from(heirs.len()))?;

    heirs
        .iter()
        .map(|heir| -> Result<Quota, InventoryError> {
            let (value, basis) = match heir.will_percentage {
                Some(pct) => (net_inheritance.multiply(pct), QuotaBasis::Will(pct)),
                None => (equal_share, QuotaBasis::EqualShare),
            };

            Ok(Quota {
                heir_id: heir.id,
                heir_name: heir.name.clone(),
                kinship: heir.kinship,
                value,
                percentage: value.ratio_of(&net_inheritance)?,
                tax: tax_rate.apply(&value),
                basis,
            })
        })
        .collect()
}

/// Total transfer tax across quotas
pub fn total_tax(quotas: &[Quota], currency: Currency) -> Result<Money, InventoryError> {
    let taxes: Vec<Money> = quotas.iter().map(|q| q.tax).collect();
    Ok(Money::try_sum(currency, &taxes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn heir(kinship: Kinship, will: Option<Decimal>) -> Heir {
        Heir {
            id: PersonId::new(),
            name: "Heir".to_string(),
            decedent_id: PersonId::new(),
            kinship,
            child_type: None,
            incapacitated: false,
            predeceased: false,
            will_percentage: will,
        }
    }

    #[test]
    fn test_equal_shares_and_tax() {
        let heirs = vec![heir(Kinship::Child, None), heir(Kinship::Spouse, None)];
        let net = Money::new(dec!(100000), Currency::BRL);

        let quotas = allocate_quotas(net, &heirs, Rate::new(dec!(0.04))).unwrap();
        assert_eq!(quotas.len(), 2);
        for quota in &quotas {
            assert_eq!(quota.value.amount(), dec!(50000));
            assert_eq!(quota.tax.amount(), dec!(2000));
            assert_eq!(quota.percentage, dec!(0.5));
        }
        assert_eq!(total_tax(&quotas, Currency::BRL).unwrap().amount(), dec!(4000));
    }

    #[test]
    fn test_will_percentage_overrides_equal_share() {
        let heirs = vec![
            heir(Kinship::Child, None),
            heir(Kinship::WillBeneficiary, Some(dec!(0.25))),
        ];
        let net = Money::new(dec!(200000), Currency::BRL);

        let quotas = allocate_quotas(net, &heirs, Rate::zero()).unwrap();
        assert_eq!(quotas[0].value.amount(), dec!(100000));
        assert_eq!(quotas[1].value.amount(), dec!(50000));
        assert_eq!(quotas[1].basis, QuotaBasis::Will(dec!(0.25)));
    }

    #[test]
    fn test_zero_net_inheritance_has_zero_percentages() {
        let heirs = vec![heir(Kinship::Child, None)];
        let quotas = allocate_quotas(Money::zero(Currency::BRL), &heirs, Rate::new(dec!(0.04))).unwrap();
        assert_eq!(quotas[0].percentage, Decimal::ZERO);
        assert!(quotas[0].tax.is_zero());
    }

    #[test]
    fn test_no_heirs_no_quotas() {
        let quotas = allocate_quotas(Money::new(dec!(1000), Currency::BRL), &[], Rate::zero()).unwrap();
        assert!(quotas.is_empty());
    }
}
