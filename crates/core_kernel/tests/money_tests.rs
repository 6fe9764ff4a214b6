//! Unit tests for Money and Rate
//!
//! Covers creation, arithmetic, the zero-floor used for estate balances,
//! ratio guards and rate application.

use core_kernel::{Currency, Money, MoneyError, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::BRL);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_from_minor_converts_centavos() {
        let m = Money::from_minor(10050, Currency::BRL);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_default_currency_is_brl() {
        assert_eq!(Currency::default(), Currency::BRL);
    }

    #[test]
    fn test_display_uses_symbol_and_two_places() {
        let m = Money::new(dec!(200000), Currency::BRL);
        assert_eq!(m.to_string(), "R$ 200000.00");
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_sub_can_go_negative() {
        let a = Money::new(dec!(30), Currency::BRL);
        let b = Money::new(dec!(100), Currency::BRL);
        let result = a.checked_sub(&b).unwrap();
        assert_eq!(result.amount(), dec!(-70));
        assert!(result.floor_zero().is_zero());
    }

    #[test]
    fn test_divide_by_zero_error() {
        let m = Money::new(dec!(100), Currency::BRL);
        assert!(matches!(m.divide(dec!(0)), Err(MoneyError::DivisionByZero)));
    }

    #[test]
    fn test_try_sum() {
        let items = vec![
            Money::new(dec!(10), Currency::BRL),
            Money::new(dec!(20.5), Currency::BRL),
        ];
        let total = Money::try_sum(Currency::BRL, &items).unwrap();
        assert_eq!(total.amount(), dec!(30.5));
    }

    #[test]
    fn test_try_sum_empty_is_zero() {
        let total = Money::try_sum(Currency::BRL, &Vec::<Money>::new()).unwrap();
        assert!(total.is_zero());
    }

    #[test]
    fn test_sum_beyond_decimal_range_is_an_error() {
        let huge = Money::new(Decimal::MAX - dec!(1), Currency::BRL);
        assert_eq!(huge.checked_add(&huge), Err(MoneyError::Overflow));
        assert_eq!(Money::try_sum(Currency::BRL, &[huge, huge]), Err(MoneyError::Overflow));

        let negative = Money::new(Decimal::MIN + dec!(1), Currency::BRL);
        assert_eq!(negative.checked_sub(&huge), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_try_sum_rejects_mixed_currencies() {
        let items = vec![
            Money::new(dec!(10), Currency::BRL),
            Money::new(dec!(20), Currency::USD),
        ];
        assert!(Money::try_sum(Currency::BRL, &items).is_err());
    }

    #[test]
    fn test_max() {
        let a = Money::new(dec!(10), Currency::BRL);
        let b = Money::new(dec!(20), Currency::BRL);
        assert_eq!(a.max(b).unwrap(), b);
        assert_eq!(b.max(a).unwrap(), b);
    }

    #[test]
    fn test_ratio_of() {
        let part = Money::new(dec!(50000), Currency::BRL);
        let whole = Money::new(dec!(100000), Currency::BRL);
        assert_eq!(part.ratio_of(&whole).unwrap(), dec!(0.5));
        assert_eq!(part.ratio_of(&Money::zero(Currency::BRL)).unwrap(), Decimal::ZERO);
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_from_percentage() {
        let rate = Rate::from_percentage(dec!(7));
        assert_eq!(rate.as_decimal(), dec!(0.07));
    }

    #[test]
    fn test_plus_stacks_surcharges() {
        let rate = Rate::new(dec!(0.05)).plus(Rate::new(dec!(0.02)));
        assert_eq!(rate.as_decimal(), dec!(0.07));
    }

    #[test]
    fn test_rates_are_ordered() {
        assert!(Rate::new(dec!(0.04)) < Rate::new(dec!(0.08)));
        assert_eq!(Rate::zero(), Rate::default());
    }
}
