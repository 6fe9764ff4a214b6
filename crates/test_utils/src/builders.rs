//! Test Data Builders
//!
//! Provides builder patterns for constructing inventory inputs with sensible
//! defaults. Tests set only the fields that matter to them.

use chrono::NaiveDate;
use core_kernel::{AssetId, CaseId, Currency, DebtId, Money, PersonId};
use domain_inventory::{
    AcquisitionOrigin, Asset, AssetCategory, ChildType, Debt, Decedent, Heir, InventoryCase,
    Kinship, MaritalStatus, PropertyRegime,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

use crate::fixtures::DateFixtures;

/// Builder for decedents
pub struct DecedentBuilder {
    decedent: Decedent,
}

impl Default for DecedentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DecedentBuilder {
    /// Married decedent under partial community, domiciled in SP
    pub fn new() -> Self {
        Self {
            decedent: Decedent {
                id: PersonId::new(),
                name: "Maria Silva".to_string(),
                date_of_death: DateFixtures::date_of_death(),
                marital_status: MaritalStatus::Married,
                regime: PropertyRegime::PartialCommunity,
                jurisdiction: "SP".to_string(),
                has_will: false,
                will_registered: false,
                simultaneous_group: None,
                death_order: None,
                inherited_from: Vec::new(),
            },
        }
    }

    pub fn with_id(mut self, id: PersonId) -> Self {
        self.decedent.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.decedent.name = name.into();
        self
    }

    pub fn with_date_of_death(mut self, date: NaiveDate) -> Self {
        self.decedent.date_of_death = date;
        self
    }

    pub fn with_marital_status(mut self, status: MaritalStatus) -> Self {
        self.decedent.marital_status = status;
        self
    }

    pub fn with_regime(mut self, regime: PropertyRegime) -> Self {
        self.decedent.regime = regime;
        self
    }

    pub fn with_jurisdiction(mut self, code: impl Into<String>) -> Self {
        self.decedent.jurisdiction = code.into();
        self
    }

    /// Declares a will, registered in court or not
    pub fn with_will(mut self, registered: bool) -> Self {
        self.decedent.has_will = true;
        self.decedent.will_registered = registered;
        self
    }

    pub fn in_simultaneous_group(mut self, group: impl Into<String>) -> Self {
        self.decedent.simultaneous_group = Some(group.into());
        self
    }

    pub fn with_death_order(mut self, order: u32) -> Self {
        self.decedent.death_order = Some(order);
        self
    }

    pub fn inherited_from(mut self, id: PersonId) -> Self {
        self.decedent.inherited_from.push(id);
        self
    }

    pub fn build(self) -> Decedent {
        self.decedent
    }
}

/// Builder for heirs
pub struct HeirBuilder {
    heir: Heir,
}

impl HeirBuilder {
    /// Living, capable heir of the given kinship
    pub fn new(decedent_id: PersonId, kinship: Kinship) -> Self {
        Self {
            heir: Heir {
                id: PersonId::new(),
                name: format!("Test {}", kinship.label()),
                decedent_id,
                kinship,
                child_type: None,
                incapacitated: false,
                predeceased: false,
                will_percentage: None,
            },
        }
    }

    pub fn spouse(decedent_id: PersonId) -> Self {
        Self::new(decedent_id, Kinship::Spouse)
    }

    pub fn child(decedent_id: PersonId) -> Self {
        Self::new(decedent_id, Kinship::Child).with_child_type(ChildType::Common)
    }

    pub fn with_id(mut self, id: PersonId) -> Self {
        self.heir.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.heir.name = name.into();
        self
    }

    pub fn with_child_type(mut self, child_type: ChildType) -> Self {
        self.heir.child_type = Some(child_type);
        self
    }

    pub fn incapacitated(mut self) -> Self {
        self.heir.incapacitated = true;
        self
    }

    pub fn predeceased(mut self) -> Self {
        self.heir.predeceased = true;
        self
    }

    pub fn with_will_percentage(mut self, percentage: Decimal) -> Self {
        self.heir.will_percentage = Some(percentage);
        self
    }

    pub fn build(self) -> Heir {
        self.heir
    }
}

/// Builder for assets
pub struct AssetBuilder {
    asset: Asset,
}

impl AssetBuilder {
    /// Apartment worth R$ 100,000 bought during the marriage, fully owned
    pub fn new(decedent_id: PersonId) -> Self {
        Self {
            asset: Asset {
                id: AssetId::new(),
                decedent_id,
                description: "Apartment".to_string(),
                category: AssetCategory::UrbanRealEstate,
                value: Money::new(dec!(100000), Currency::BRL),
                ownership_fraction: dec!(1),
                origin: AcquisitionOrigin::DuringMarriage,
                acquired_before_marriage: None,
                incommunicability_clause: false,
                has_lien: false,
                linked_debts: Vec::new(),
            },
        }
    }

    pub fn with_id(mut self, id: AssetId) -> Self {
        self.asset.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.asset.description = description.into();
        self
    }

    pub fn with_category(mut self, category: AssetCategory) -> Self {
        self.asset.category = category;
        self
    }

    /// Sets the value in BRL
    pub fn with_value(mut self, amount: Decimal) -> Self {
        self.asset.value = Money::new(amount, Currency::BRL);
        self
    }

    pub fn with_money(mut self, value: Money) -> Self {
        self.asset.value = value;
        self
    }

    pub fn with_ownership_fraction(mut self, fraction: Decimal) -> Self {
        self.asset.ownership_fraction = fraction;
        self
    }

    pub fn with_origin(mut self, origin: AcquisitionOrigin) -> Self {
        self.asset.origin = origin;
        self
    }

    pub fn acquired_before_marriage(mut self, before: bool) -> Self {
        self.asset.acquired_before_marriage = Some(before);
        self
    }

    pub fn with_clause(mut self) -> Self {
        self.asset.incommunicability_clause = true;
        self
    }

    pub fn with_lien(mut self) -> Self {
        self.asset.has_lien = true;
        self
    }

    pub fn linked_to(mut self, debt: DebtId) -> Self {
        self.asset.linked_debts.push(debt);
        self
    }

    pub fn build(self) -> Asset {
        self.asset
    }
}

/// Builder for debts
pub struct DebtBuilder {
    debt: Debt,
}

impl DebtBuilder {
    /// Debt in BRL
    pub fn new(decedent_id: PersonId, amount: Decimal) -> Self {
        Self {
            debt: Debt {
                id: DebtId::new(),
                decedent_id,
                description: "Bank loan".to_string(),
                amount: Money::new(amount, Currency::BRL),
            },
        }
    }

    pub fn with_id(mut self, id: DebtId) -> Self {
        self.debt.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.debt.description = description.into();
        self
    }

    pub fn with_money(mut self, amount: Money) -> Self {
        self.debt.amount = amount;
        self
    }

    pub fn build(self) -> Debt {
        self.debt
    }
}

/// Builder for complete inventory cases
pub struct CaseBuilder {
    case: InventoryCase,
}

impl Default for CaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CaseBuilder {
    /// Empty BRL case
    pub fn new() -> Self {
        Self {
            case: InventoryCase {
                case_id: CaseId::new(),
                currency: Currency::BRL,
                decedents: Vec::new(),
                heirs: Vec::new(),
                assets: Vec::new(),
                debts: Vec::new(),
                tax_rate_overrides: BTreeMap::new(),
                litigation_declared: false,
                custom_partition: BTreeMap::new(),
            },
        }
    }

    pub fn with_case_id(mut self, id: CaseId) -> Self {
        self.case.case_id = id;
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.case.currency = currency;
        self
    }

    pub fn decedent(mut self, decedent: Decedent) -> Self {
        self.case.decedents.push(decedent);
        self
    }

    pub fn heir(mut self, heir: Heir) -> Self {
        self.case.heirs.push(heir);
        self
    }

    pub fn asset(mut self, asset: Asset) -> Self {
        self.case.assets.push(asset);
        self
    }

    pub fn debt(mut self, debt: Debt) -> Self {
        self.case.debts.push(debt);
        self
    }

    pub fn with_tax_override(mut self, jurisdiction: impl Into<String>, rate: Decimal) -> Self {
        self.case.tax_rate_overrides.insert(jurisdiction.into(), rate);
        self
    }

    pub fn with_litigation(mut self) -> Self {
        self.case.litigation_declared = true;
        self
    }

    /// Assigns a specific asset to an heir in the partition
    pub fn assign(mut self, heir: PersonId, asset: AssetId) -> Self {
        self.case.custom_partition.insert(heir, asset);
        self
    }

    pub fn build(self) -> InventoryCase {
        self.case
    }
}
