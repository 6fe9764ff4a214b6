//! Professional fee estimate
//!
//! The applied rate is the procedure's base rate plus a complexity surcharge
//! plus a surcharge for large heir groups. The recommended fee is the net
//! estate times the applied rate; the floor and ceiling bracket it.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

use crate::complexity::{ComplexityAssessment, ComplexityCategory};
use crate::error::InventoryError;
use crate::procedure::Procedure;

const NOTARIAL_BASE_RATE: Decimal = dec!(0.05);
const IN_COURT_BASE_RATE: Decimal = dec!(0.07);
const LARGE_HEIR_GROUP_SURCHARGE: Decimal = dec!(0.01);
const LARGE_HEIR_GROUP: usize = 10;
const FLOOR_FACTOR: Decimal = dec!(0.8);
const CEILING_MARGIN: Decimal = dec!(0.02);
const UPFRONT_SHARE: Decimal = dec!(0.30);
const SUCCESS_RATE_MIN: Decimal = dec!(0.15);
const SUCCESS_RATE_MAX: Decimal = dec!(0.20);
const IN_COURT_HOURS_FACTOR: Decimal = dec!(1.5);

/// Default minimum fee, in case currency
pub const DEFAULT_MINIMUM_FEE: Decimal = dec!(5000);

/// Base rate for a procedure
pub fn base_rate(procedure: Procedure) -> Rate {
    match procedure {
        Procedure::Notarial => Rate::new(NOTARIAL_BASE_RATE),
        Procedure::InCourt => Rate::new(IN_COURT_BASE_RATE),
    }
}

/// Surcharge by complexity score
pub fn complexity_surcharge(score: u32) -> Rate {
    let surcharge = match score {
        0..=15 => dec!(0),
        16..=30 => dec!(0.01),
        31..=60 => dec!(0.02),
        61..=90 => dec!(0.04),
        _ => dec!(0.06),
    };
    Rate::new(surcharge)
}

/// Estimated working hours, inclusive
pub fn estimated_hours(category: ComplexityCategory, procedure: Procedure) -> (Decimal, Decimal) {
    let (min, max) = match category {
        ComplexityCategory::Simple => (dec!(20), dec!(40)),
        ComplexityCategory::Moderate => (dec!(40), dec!(90)),
        ComplexityCategory::Complex => (dec!(90), dec!(180)),
        ComplexityCategory::High => (dec!(180), dec!(360)),
    };
    match procedure {
        Procedure::Notarial => (min, max),
        Procedure::InCourt => (min * IN_COURT_HOURS_FACTOR, max * IN_COURT_HOURS_FACTOR),
    }
}

/// Alternative ways to bill the same engagement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "model")]
pub enum BillingModel {
    /// Flat percentage of the net estate
    Percentage { rate: Rate, amount: Money },
    /// Upfront portion of the fee plus a success portion
    PercentagePlusSuccess {
        upfront: Money,
        success_rate_min: Rate,
        success_rate_max: Rate,
        success_min: Money,
        success_max: Money,
    },
    /// Fixed minimum fee
    FixedMinimum { amount: Money },
}

/// Recommended fee for one estate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeEstimate {
    pub base_rate: Rate,
    pub complexity_surcharge: Rate,
    pub heir_surcharge: Rate,
    pub applied_rate: Rate,
    /// `net_estate * applied_rate`
    pub recommended: Money,
    /// `max(net_estate * base_rate * 0.8, minimum fee)`
    pub floor: Money,
    /// `net_estate * (applied_rate + 2%)`
    pub ceiling: Money,
    pub hours_min: Decimal,
    pub hours_max: Decimal,
    pub billing_models: Vec<BillingModel>,
}

/// Computes the fee estimate
///
/// # Arguments
///
/// * `net_estate` - Net estate of the decedent
/// * `procedure` - Chosen procedure
/// * `complexity` - Whole-case complexity assessment
/// * `heir_count` - Number of effective heirs
/// * `minimum_fee` - Fixed minimum fee in the estate's currency
pub fn calculate_fees(
    net_estate: Money,
    procedure: Procedure,
    complexity: &ComplexityAssessment,
    heir_count: usize,
    minimum_fee: Decimal,
) -> Result<FeeEstimate, InventoryError> {
    let currency = net_estate.currency();
    let base = base_rate(procedure);
    let surcharge = complexity_surcharge(complexity.score);
    let heir_surcharge = if heir_count > LARGE_HEIR_GROUP {
        Rate::new(LARGE_HEIR_GROUP_SURCHARGE)
    } else {
        Rate::zero()
    };
    let applied = base.plus(surcharge).plus(heir_surcharge);

    let recommended = applied.apply(&net_estate);
    let minimum = Money::new(minimum_fee, currency);
    let floor = base.apply(&net_estate).multiply(FLOOR_FACTOR).max(minimum)?;
    let ceiling = applied.plus(Rate::new(CEILING_MARGIN)).apply(&net_estate);
    let (hours_min, hours_max) = estimated_hours(complexity.category, procedure);

    let billing_models = vec![
        BillingModel::Percentage {
            rate: applied,
            amount: recommended,
        },
        BillingModel::PercentagePlusSuccess {
            upfront: recommended.multiply(UPFRONT_SHARE),
            success_rate_min: Rate::new(SUCCESS_RATE_MIN),
            success_rate_max: Rate::new(SUCCESS_RATE_MAX),
            success_min: recommended.multiply(SUCCESS_RATE_MIN),
            success_max: recommended.multiply(SUCCESS_RATE_MAX),
        },
        BillingModel::FixedMinimum { amount: minimum },
    ];

    Ok(FeeEstimate {
        base_rate: base,
        complexity_surcharge: surcharge,
        heir_surcharge,
        applied_rate: applied,
        recommended,
        floor,
        ceiling,
        hours_min,
        hours_max,
        billing_models,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;

    fn simple() -> ComplexityAssessment {
        ComplexityAssessment::from_factors(vec![])
    }

    #[test]
    fn test_notarial_simple_fee() {
        let net = Money::new(dec!(100000), Currency::BRL);
        let fee = calculate_fees(net, Procedure::Notarial, &simple(), 2, DEFAULT_MINIMUM_FEE).unwrap();

        assert_eq!(fee.applied_rate, Rate::new(dec!(0.05)));
        assert_eq!(fee.recommended.amount(), dec!(5000));
        assert_eq!(fee.floor.amount(), dec!(5000));
        assert_eq!(fee.ceiling.amount(), dec!(7000));
        assert_eq!((fee.hours_min, fee.hours_max), (dec!(20), dec!(40)));
    }

    #[test]
    fn test_floor_uses_base_rate_above_minimum() {
        let net = Money::new(dec!(1000000), Currency::BRL);
        let fee = calculate_fees(net, Procedure::InCourt, &simple(), 1, DEFAULT_MINIMUM_FEE).unwrap();
        assert_eq!(fee.floor.amount(), dec!(56000));
        assert_eq!((fee.hours_min, fee.hours_max), (dec!(30), dec!(60)));
    }

    #[test]
    fn test_surcharge_buckets() {
        assert_eq!(complexity_surcharge(15), Rate::zero());
        assert_eq!(complexity_surcharge(16), Rate::new(dec!(0.01)));
        assert_eq!(complexity_surcharge(60), Rate::new(dec!(0.02)));
        assert_eq!(complexity_surcharge(90), Rate::new(dec!(0.04)));
        assert_eq!(complexity_surcharge(91), Rate::new(dec!(0.06)));
    }

    #[test]
    fn test_large_heir_group_surcharge() {
        let net = Money::new(dec!(100000), Currency::BRL);
        let fee = calculate_fees(net, Procedure::Notarial, &simple(), 11, DEFAULT_MINIMUM_FEE).unwrap();
        assert_eq!(fee.applied_rate, Rate::new(dec!(0.06)));
    }

    #[test]
    fn test_success_model_portions() {
        let net = Money::new(dec!(200000), Currency::BRL);
        let fee = calculate_fees(net, Procedure::Notarial, &simple(), 2, DEFAULT_MINIMUM_FEE).unwrap();
        match &fee.billing_models[1] {
            BillingModel::PercentagePlusSuccess { upfront, success_min, success_max, .. } => {
                assert_eq!(upfront.amount(), dec!(3000));
                assert_eq!(success_min.amount(), dec!(1500));
                assert_eq!(success_max.amount(), dec!(2000));
            }
            other => panic!("unexpected model {:?}", other),
        }
    }
}
