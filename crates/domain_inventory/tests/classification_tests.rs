//! Property Classification and Estate Balance Tests
//!
//! # Test Organization
//!
//! - `classifier_tests` - Per-regime classification rules
//! - `splitter_tests` - Patrimony bucketing
//! - `balance_tests` - Monte-mor, debts and inherited amounts
//! - `marital_share_tests` - Meação over the community bucket
//! - `property_tests` - Universal properties with proptest

use core_kernel::{Currency, Money, PersonId};
use domain_inventory::{
    calculate_balance, calculate_marital_share, classify_asset, split_patrimony,
    AcquisitionOrigin, Asset, AssetCategory, Classification, Debt, PropertyRegime,
};
use proptest::prelude::*;
use rust_decimal_macros::dec;
use test_utils::*;

// ============================================================================
// CLASSIFIER TESTS
// ============================================================================

mod classifier_tests {
    use super::*;

    #[test]
    fn test_clause_forces_separate_under_universal_community() {
        let asset = AssetBuilder::new(PersonId::new()).with_clause().build();
        assert_eq!(
            classify_asset(&asset, PropertyRegime::UniversalCommunity),
            Classification::Separate,
            "Incommunicability clause overrides universal community"
        );
    }

    #[test]
    fn test_universal_community_defaults_to_community() {
        let asset = AssetBuilder::new(PersonId::new())
            .with_origin(AcquisitionOrigin::PreMarriage)
            .build();
        assert_eq!(
            classify_asset(&asset, PropertyRegime::UniversalCommunity),
            Classification::Community
        );
    }

    #[test]
    fn test_universal_community_inheritance_needs_review() {
        let asset = AssetBuilder::new(PersonId::new())
            .with_origin(AcquisitionOrigin::Inheritance)
            .build();
        assert_eq!(
            classify_asset(&asset, PropertyRegime::UniversalCommunity),
            Classification::NeedsReview
        );
    }

    #[test]
    fn test_partial_community_subrogation_is_separate() {
        let asset = AssetBuilder::new(PersonId::new())
            .with_origin(AcquisitionOrigin::Subrogation)
            .build();
        assert_eq!(
            classify_asset(&asset, PropertyRegime::PartialCommunity),
            Classification::Separate
        );
    }

    #[test]
    fn test_separation_regimes_always_separate() {
        let asset = AssetBuilder::new(PersonId::new()).build();
        assert_eq!(
            classify_asset(&asset, PropertyRegime::ConventionalSeparation),
            Classification::Separate
        );
        assert_eq!(
            classify_asset(&asset, PropertyRegime::MandatorySeparation),
            Classification::Separate
        );
    }

    #[test]
    fn test_final_participation_acquisitions_need_review() {
        let asset = AssetBuilder::new(PersonId::new()).build();
        assert_eq!(
            classify_asset(&asset, PropertyRegime::FinalParticipation),
            Classification::NeedsReview,
            "Acquisitions are only settled at dissolution"
        );
    }
}

// ============================================================================
// SPLITTER TESTS
// ============================================================================

mod splitter_tests {
    use super::*;

    #[test]
    fn test_no_assets_gives_empty_buckets() {
        let split = split_patrimony(Vec::<Asset>::new().iter(), PropertyRegime::PartialCommunity);
        assert!(split.is_empty());
        assert!(split.community.is_empty());
        assert!(split.separate.is_empty());
        assert!(split.undetermined.is_empty());
    }

    #[test]
    fn test_buckets_are_tagged() {
        let owner = PersonId::new();
        let assets = vec![
            AssetBuilder::new(owner).build(),
            AssetBuilder::new(owner).with_origin(AcquisitionOrigin::Gift).build(),
            AssetBuilder::new(owner)
                .with_category(AssetCategory::Vehicle)
                .with_origin(AcquisitionOrigin::PreMarriage)
                .build(),
        ];

        let split = split_patrimony(&assets, PropertyRegime::PartialCommunity);
        assert_eq!(split.community.len(), 1);
        assert_eq!(split.separate.len(), 2);
        assert!(split
            .separate
            .iter()
            .all(|c| c.classification == Classification::Separate));
        assert_eq!(split.iter().count(), 3, "No asset is dropped");
    }
}

// ============================================================================
// BALANCE TESTS
// ============================================================================

mod balance_tests {
    use super::*;

    #[test]
    fn test_fraction_and_inherited_amount_enter_monte_mor() {
        let owner = PersonId::new();
        let assets = vec![AssetBuilder::new(owner)
            .with_value(dec!(300000))
            .with_ownership_fraction(dec!(0.5))
            .build()];
        let debts = vec![DebtBuilder::new(owner, dec!(20000)).build()];

        let balance = calculate_balance(
            &assets,
            &debts,
            MoneyFixtures::brl_50k(),
            Currency::BRL,
        )
        .unwrap();

        assert_amount(&balance.asset_total, dec!(150000));
        assert_amount(&balance.gross_assets, dec!(200000));
        assert_amount(&balance.net_estate, dec!(180000));
        assert!(!balance.clamped);
    }

    #[test]
    fn test_negative_estate_is_floored() {
        let owner = PersonId::new();
        let assets = vec![AssetBuilder::new(owner).with_value(dec!(10000)).build()];
        let debts = vec![DebtBuilder::new(owner, dec!(25000)).build()];

        let balance =
            calculate_balance(&assets, &debts, MoneyFixtures::brl_zero(), Currency::BRL).unwrap();
        assert_money_zero(&balance.net_estate);
        assert!(balance.clamped, "Shortfall should be flagged");
    }

    #[test]
    fn test_zero_assets_and_debts() {
        let balance = calculate_balance(
            Vec::<Asset>::new().iter(),
            Vec::<Debt>::new().iter(),
            MoneyFixtures::brl_zero(),
            Currency::BRL,
        )
        .unwrap();
        assert_money_zero(&balance.net_estate);
    }
}

// ============================================================================
// MARITAL SHARE TESTS
// ============================================================================

mod marital_share_tests {
    use super::*;

    #[test]
    fn test_half_of_community() {
        let owner = PersonId::new();
        let assets = vec![AssetBuilder::new(owner).with_value(dec!(200000)).build()];
        let split = split_patrimony(&assets, PropertyRegime::PartialCommunity);

        let share = calculate_marital_share(
            &split.community,
            PropertyRegime::PartialCommunity,
            true,
            MoneyFixtures::brl_200k(),
        )
        .unwrap();

        assert_amount(&share.marital_share, dec!(100000));
        assert_amount(&share.net_inheritance, dec!(100000));
    }

    #[test]
    fn test_no_spouse_no_share() {
        let owner = PersonId::new();
        let assets = vec![AssetBuilder::new(owner).build()];
        let split = split_patrimony(&assets, PropertyRegime::UniversalCommunity);

        let share = calculate_marital_share(
            &split.community,
            PropertyRegime::UniversalCommunity,
            false,
            MoneyFixtures::brl_100k(),
        )
        .unwrap();
        assert_money_zero(&share.marital_share);
        assert_amount(&share.net_inheritance, dec!(100000));
    }

    #[test]
    fn test_net_inheritance_never_negative() {
        let owner = PersonId::new();
        let assets = vec![AssetBuilder::new(owner).with_value(dec!(200000)).build()];
        let split = split_patrimony(&assets, PropertyRegime::PartialCommunity);

        // debts consumed most of the estate
        let share = calculate_marital_share(
            &split.community,
            PropertyRegime::PartialCommunity,
            true,
            Money::new(dec!(40000), Currency::BRL),
        )
        .unwrap();
        assert_money_zero(&share.net_inheritance);
    }
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

mod property_tests {
    use super::*;

    proptest! {
        #[test]
        fn prop_clause_always_separate(
            asset in clause_asset_strategy(PersonId::from_u128(1)),
            regime in regime_strategy(),
        ) {
            prop_assert_eq!(classify_asset(&asset, regime), Classification::Separate);
        }

        #[test]
        fn prop_classification_is_deterministic(
            asset in asset_strategy(PersonId::from_u128(1)),
            regime in regime_strategy(),
        ) {
            prop_assert_eq!(classify_asset(&asset, regime), classify_asset(&asset, regime));
        }

        #[test]
        fn prop_separation_has_no_marital_share(
            assets in proptest::collection::vec(asset_strategy(PersonId::from_u128(1)), 0..8),
            regime in separation_regime_strategy(),
        ) {
            let split = split_patrimony(&assets, regime);
            let balance = calculate_balance(
                &assets,
                Vec::<Debt>::new().iter(),
                Money::zero(Currency::BRL),
                Currency::BRL,
            ).unwrap();
            let share = calculate_marital_share(&split.community, regime, true, balance.net_estate).unwrap();
            prop_assert!(share.marital_share.is_zero());
            prop_assert_eq!(share.net_inheritance, balance.net_estate);
        }

        #[test]
        fn prop_split_never_drops_assets(
            assets in proptest::collection::vec(asset_strategy(PersonId::from_u128(1)), 0..12),
            regime in regime_strategy(),
        ) {
            prop_assert_eq!(split_patrimony(&assets, regime).len(), assets.len());
        }
    }
}
