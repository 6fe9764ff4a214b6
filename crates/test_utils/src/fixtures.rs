//! Pre-built Test Fixtures
//!
//! Provides ready-to-use ids, amounts and complete inventory cases. Ids are
//! deterministic so scenarios can be asserted against by id.

use chrono::NaiveDate;
use core_kernel::{AssetId, Currency, Money, PersonId};
use domain_inventory::{InventoryCase, Kinship, PropertyRegime};
use rust_decimal_macros::dec;

use crate::builders::{AssetBuilder, CaseBuilder, DecedentBuilder, HeirBuilder};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// R$ 200,000, the canonical community asset
    pub fn brl_200k() -> Money {
        Money::new(dec!(200000), Currency::BRL)
    }

    pub fn brl_100k() -> Money {
        Money::new(dec!(100000), Currency::BRL)
    }

    pub fn brl_50k() -> Money {
        Money::new(dec!(50000), Currency::BRL)
    }

    pub fn brl_zero() -> Money {
        Money::zero(Currency::BRL)
    }

    /// For currency mismatch tests
    pub fn usd_1000() -> Money {
        Money::new(dec!(1000), Currency::USD)
    }
}

/// Fixture for dates
pub struct DateFixtures;

impl DateFixtures {
    pub fn date_of_death() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    pub fn accident_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 8, 20).unwrap()
    }
}

/// Deterministic ids
pub struct IdFixtures;

impl IdFixtures {
    pub fn decedent() -> PersonId {
        PersonId::from_u128(0xD1)
    }

    pub fn second_decedent() -> PersonId {
        PersonId::from_u128(0xD2)
    }

    pub fn spouse() -> PersonId {
        PersonId::from_u128(0x51)
    }

    pub fn child() -> PersonId {
        PersonId::from_u128(0xC1)
    }

    pub fn second_child() -> PersonId {
        PersonId::from_u128(0xC2)
    }

    pub fn home() -> AssetId {
        AssetId::from_u128(0xA1)
    }
}

/// Complete cases used across suites
pub struct CaseFixtures;

impl CaseFixtures {
    /// Partial community, one R$ 200,000 asset bought during the marriage,
    /// no debts, a surviving spouse and one child, domiciled in SP (4%)
    pub fn partial_community_couple() -> InventoryCase {
        let decedent = IdFixtures::decedent();
        CaseBuilder::new()
            .decedent(DecedentBuilder::new().with_id(decedent).build())
            .heir(
                HeirBuilder::spouse(decedent)
                    .with_id(IdFixtures::spouse())
                    .with_name("João Silva")
                    .build(),
            )
            .heir(
                HeirBuilder::child(decedent)
                    .with_id(IdFixtures::child())
                    .with_name("Ana Silva")
                    .build(),
            )
            .asset(
                AssetBuilder::new(decedent)
                    .with_id(IdFixtures::home())
                    .with_description("Family home")
                    .with_value(dec!(200000))
                    .build(),
            )
            .build()
    }

    /// Same as [`CaseFixtures::partial_community_couple`] with the home under
    /// an incommunicability clause
    pub fn clause_protected_couple() -> InventoryCase {
        let mut case = Self::partial_community_couple();
        for asset in &mut case.assets {
            asset.incommunicability_clause = true;
        }
        case
    }

    /// Two spouses who died in the same accident without a known order,
    /// each naming the other as heir alongside one child
    pub fn simultaneous_couple() -> InventoryCase {
        let a = IdFixtures::decedent();
        let b = IdFixtures::second_decedent();
        CaseBuilder::new()
            .decedent(
                DecedentBuilder::new()
                    .with_id(a)
                    .with_name("Carlos Souza")
                    .with_date_of_death(DateFixtures::accident_date())
                    .in_simultaneous_group("accident")
                    .build(),
            )
            .decedent(
                DecedentBuilder::new()
                    .with_id(b)
                    .with_name("Helena Souza")
                    .with_date_of_death(DateFixtures::accident_date())
                    .in_simultaneous_group("accident")
                    .build(),
            )
            .heir(HeirBuilder::spouse(a).with_id(b).with_name("Helena Souza").build())
            .heir(HeirBuilder::child(a).with_id(IdFixtures::child()).build())
            .heir(HeirBuilder::spouse(b).with_id(a).with_name("Carlos Souza").build())
            .heir(HeirBuilder::child(b).with_id(IdFixtures::child()).build())
            .asset(AssetBuilder::new(a).with_value(dec!(300000)).build())
            .asset(AssetBuilder::new(b).with_value(dec!(100000)).build())
            .build()
    }

    /// A single decedent with no heirs of any class
    pub fn vacant_estate() -> InventoryCase {
        let decedent = IdFixtures::decedent();
        CaseBuilder::new()
            .decedent(
                DecedentBuilder::new()
                    .with_id(decedent)
                    .with_regime(PropertyRegime::ConventionalSeparation)
                    .build(),
            )
            .asset(AssetBuilder::new(decedent).with_value(dec!(80000)).build())
            .build()
    }

    /// Father dies first leaving a widow and a son; the son dies later
    /// leaving his own child
    pub fn successive_deaths() -> InventoryCase {
        let father = IdFixtures::decedent();
        let son = IdFixtures::second_decedent();
        CaseBuilder::new()
            .decedent(
                DecedentBuilder::new()
                    .with_id(son)
                    .with_name("Pedro Lima")
                    .with_marital_status(domain_inventory::MaritalStatus::Single)
                    .with_death_order(2)
                    .inherited_from(father)
                    .build(),
            )
            .decedent(
                DecedentBuilder::new()
                    .with_id(father)
                    .with_name("Antônio Lima")
                    .with_death_order(1)
                    .build(),
            )
            .heir(HeirBuilder::spouse(father).with_id(IdFixtures::spouse()).build())
            .heir(HeirBuilder::child(father).with_id(son).with_name("Pedro Lima").build())
            .heir(HeirBuilder::new(son, Kinship::Child).with_id(IdFixtures::child()).build())
            .asset(AssetBuilder::new(father).with_value(dec!(400000)).build())
            .asset(
                AssetBuilder::new(son)
                    .with_value(dec!(50000))
                    .with_origin(domain_inventory::AcquisitionOrigin::PreMarriage)
                    .build(),
            )
            .build()
    }
}
