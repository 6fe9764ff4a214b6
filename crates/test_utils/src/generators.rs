//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating inventory inputs that satisfy
//! the boundary validation rules.

use core_kernel::{AssetId, Currency, Money, PersonId};
use domain_inventory::{
    AcquisitionOrigin, Asset, AssetCategory, ChildType, Heir, Kinship, PropertyRegime,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for every marital property regime
pub fn regime_strategy() -> impl Strategy<Value = PropertyRegime> {
    prop_oneof![
        Just(PropertyRegime::UniversalCommunity),
        Just(PropertyRegime::PartialCommunity),
        Just(PropertyRegime::ConventionalSeparation),
        Just(PropertyRegime::MandatorySeparation),
        Just(PropertyRegime::FinalParticipation),
    ]
}

/// Strategy for the two separation regimes
pub fn separation_regime_strategy() -> impl Strategy<Value = PropertyRegime> {
    prop_oneof![
        Just(PropertyRegime::ConventionalSeparation),
        Just(PropertyRegime::MandatorySeparation),
    ]
}

pub fn origin_strategy() -> impl Strategy<Value = AcquisitionOrigin> {
    prop_oneof![
        Just(AcquisitionOrigin::PreMarriage),
        Just(AcquisitionOrigin::DuringMarriage),
        Just(AcquisitionOrigin::Gift),
        Just(AcquisitionOrigin::Inheritance),
        Just(AcquisitionOrigin::Subrogation),
    ]
}

pub fn category_strategy() -> impl Strategy<Value = AssetCategory> {
    prop_oneof![
        Just(AssetCategory::UrbanRealEstate),
        Just(AssetCategory::RuralProperty),
        Just(AssetCategory::Vehicle),
        Just(AssetCategory::BankAccount),
        Just(AssetCategory::Investment),
        Just(AssetCategory::BusinessInterest),
        Just(AssetCategory::Other),
    ]
}

/// Strategy for non-negative BRL amounts with cents
pub fn brl_money_strategy() -> impl Strategy<Value = Money> {
    (0i64..10_000_000_000i64).prop_map(|minor| Money::from_minor(minor, Currency::BRL))
}

/// Strategy for ownership fractions in (0, 1] with two decimals
pub fn ownership_fraction_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..=100i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for valid assets of one decedent
pub fn asset_strategy(decedent_id: PersonId) -> impl Strategy<Value = Asset> {
    (
        category_strategy(),
        brl_money_strategy(),
        ownership_fraction_strategy(),
        origin_strategy(),
        proptest::option::of(any::<bool>()),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            move |(category, value, fraction, origin, before, clause, lien)| Asset {
                id: AssetId::new(),
                decedent_id,
                description: "Generated asset".to_string(),
                category,
                value,
                ownership_fraction: fraction,
                origin,
                acquired_before_marriage: before,
                incommunicability_clause: clause,
                has_lien: lien,
                linked_debts: Vec::new(),
            },
        )
}

/// Strategy for assets carrying an incommunicability clause
pub fn clause_asset_strategy(decedent_id: PersonId) -> impl Strategy<Value = Asset> {
    asset_strategy(decedent_id).prop_map(|mut asset| {
        asset.incommunicability_clause = true;
        asset
    })
}

/// Strategy for a living, capable heir of any intestate kinship
pub fn intestate_heir_strategy(decedent_id: PersonId) -> impl Strategy<Value = Heir> {
    (
        prop_oneof![
            Just(Kinship::Spouse),
            Just(Kinship::Partner),
            Just(Kinship::Child),
            Just(Kinship::Grandchild),
            Just(Kinship::Parent),
            Just(Kinship::Sibling),
            Just(Kinship::OtherCollateral),
        ],
        proptest::option::of(prop_oneof![
            Just(ChildType::Common),
            Just(ChildType::ExclusiveDecedent),
        ]),
    )
        .prop_map(move |(kinship, child_type)| Heir {
            id: PersonId::new(),
            name: format!("Generated {}", kinship.label()),
            decedent_id,
            kinship,
            child_type: if kinship == Kinship::Child { child_type } else { None },
            incapacitated: false,
            predeceased: false,
            will_percentage: None,
        })
}

/// Strategy for a non-empty group of intestate heirs
pub fn heir_group_strategy(decedent_id: PersonId, max: usize) -> impl Strategy<Value = Vec<Heir>> {
    proptest::collection::vec(intestate_heir_strategy(decedent_id), 1..=max)
}

/// Strategy for tax rates between 0% and 10% in basis points
pub fn tax_rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=1000i64).prop_map(|bp| Decimal::new(bp, 4))
}
