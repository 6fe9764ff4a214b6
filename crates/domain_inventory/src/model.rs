//! Inventory input model
//!
//! Decedents, heirs, assets and debts as supplied by the caller. None of
//! these are mutated by the engine; every component reads them through
//! shared references.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::{AssetId, CaseId, Currency, DebtId, Money, PersonId};

/// Marital status of a decedent at the date of death
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
    StableUnion,
    Divorced,
    Widowed,
}

/// Marital property regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyRegime {
    /// Comunhão universal de bens
    UniversalCommunity,
    /// Comunhão parcial de bens (the legal default)
    PartialCommunity,
    /// Separação total (convencional) de bens
    ConventionalSeparation,
    /// Separação obrigatória de bens
    MandatorySeparation,
    /// Participação final nos aquestos
    FinalParticipation,
}

impl PropertyRegime {
    /// Returns true for both separation regimes
    pub fn is_separation(&self) -> bool {
        matches!(
            self,
            PropertyRegime::ConventionalSeparation | PropertyRegime::MandatorySeparation
        )
    }

    /// Whether a surviving spouse concurs with the decedent's descendants
    ///
    /// Under universal community the spouse already holds half of
    /// everything through the marital share; under mandatory separation the
    /// spouse is excluded from concurrence.
    pub fn spouse_concurs_with_descendants(&self) -> bool {
        !matches!(
            self,
            PropertyRegime::UniversalCommunity | PropertyRegime::MandatorySeparation
        )
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            PropertyRegime::UniversalCommunity => "universal community",
            PropertyRegime::PartialCommunity => "partial community",
            PropertyRegime::ConventionalSeparation => "total separation",
            PropertyRegime::MandatorySeparation => "mandatory separation",
            PropertyRegime::FinalParticipation => "final participation in acquisitions",
        }
    }

    /// Civil Code articles governing the regime
    pub fn legal_basis(&self) -> &'static str {
        match self {
            PropertyRegime::UniversalCommunity => "CC arts. 1.667-1.671",
            PropertyRegime::PartialCommunity => "CC arts. 1.658-1.666",
            PropertyRegime::ConventionalSeparation => "CC arts. 1.687-1.688",
            PropertyRegime::MandatorySeparation => "CC art. 1.641",
            PropertyRegime::FinalParticipation => "CC arts. 1.672-1.686",
        }
    }
}

/// Kinship of an heir to the decedent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kinship {
    Spouse,
    Partner,
    Child,
    Grandchild,
    Parent,
    Sibling,
    OtherCollateral,
    WillBeneficiary,
}

impl Kinship {
    /// Spouse or stable-union partner
    pub fn is_spouse_or_partner(&self) -> bool {
        matches!(self, Kinship::Spouse | Kinship::Partner)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Kinship::Spouse => "spouse",
            Kinship::Partner => "partner",
            Kinship::Child => "child",
            Kinship::Grandchild => "grandchild",
            Kinship::Parent => "parent",
            Kinship::Sibling => "sibling",
            Kinship::OtherCollateral => "collateral",
            Kinship::WillBeneficiary => "will beneficiary",
        }
    }
}

/// Parentage of a child in a blended family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildType {
    /// Child of both the decedent and the surviving spouse
    Common,
    /// Child of the decedent only (from an earlier union)
    ExclusiveDecedent,
    /// Child of the surviving spouse only; not an heir of the decedent
    ExclusiveSpouse,
}

/// Asset category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    UrbanRealEstate,
    RuralProperty,
    Vehicle,
    BankAccount,
    Investment,
    /// Company shares or quotas
    BusinessInterest,
    Other,
}

/// How the decedent came to own an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcquisitionOrigin {
    PreMarriage,
    DuringMarriage,
    Gift,
    Inheritance,
    /// Bought with the proceeds of a separate asset
    Subrogation,
}

/// A deceased person whose estate is being inventoried
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decedent {
    pub id: PersonId,
    pub name: String,
    pub date_of_death: NaiveDate,
    pub marital_status: MaritalStatus,
    pub regime: PropertyRegime,
    /// Domicile state code used for the transfer-tax lookup (e.g. "SP")
    pub jurisdiction: String,
    #[serde(default)]
    pub has_will: bool,
    /// Will already opened and registered in court
    #[serde(default)]
    pub will_registered: bool,
    #[serde(default)]
    pub simultaneous_group: Option<String>,
    /// Explicit position in a chain of deaths (lower dies first)
    #[serde(default)]
    pub death_order: Option<u32>,
    /// Decedents this person inherited from in an earlier step
    #[serde(default)]
    pub inherited_from: Vec<PersonId>,
}

impl Decedent {
    /// A will exists but has not been registered in court
    pub fn has_unprobated_will(&self) -> bool {
        self.has_will && !self.will_registered
    }
}

/// A potential successor of one decedent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heir {
    pub id: PersonId,
    pub name: String,
    pub decedent_id: PersonId,
    pub kinship: Kinship,
    #[serde(default)]
    pub child_type: Option<ChildType>,
    #[serde(default)]
    pub incapacitated: bool,
    /// Died before the decedent
    #[serde(default)]
    pub predeceased: bool,
    /// Testamentary share in [0, 1]
    #[serde(default)]
    pub will_percentage: Option<Decimal>,
}

impl Heir {
    /// Spouse or partner still alive at the decedent's death
    pub fn is_qualifying_spouse(&self) -> bool {
        self.kinship.is_spouse_or_partner() && !self.predeceased
    }

    /// Child who can inherit from the decedent (excludes stepchildren)
    pub fn is_decedent_child(&self) -> bool {
        self.kinship == Kinship::Child && self.child_type != Some(ChildType::ExclusiveSpouse)
    }
}

fn full_ownership() -> Decimal {
    dec!(1)
}

/// An asset held (fully or partially) by a decedent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub decedent_id: PersonId,
    pub description: String,
    pub category: AssetCategory,
    /// Market value of the whole asset
    pub value: Money,
    /// Fraction of the asset owned by the decedent, in (0, 1]
    #[serde(default = "full_ownership")]
    pub ownership_fraction: Decimal,
    pub origin: AcquisitionOrigin,
    #[serde(default)]
    pub acquired_before_marriage: Option<bool>,
    /// Cláusula de incomunicabilidade
    #[serde(default)]
    pub incommunicability_clause: bool,
    #[serde(default)]
    pub has_lien: bool,
    #[serde(default)]
    pub linked_debts: Vec<DebtId>,
}

impl Asset {
    /// Value of the decedent's share of the asset
    pub fn effective_value(&self) -> Money {
        self.value.multiply(self.ownership_fraction)
    }

    /// Acquired before the marriage, by origin or by explicit flag
    pub fn is_pre_marriage(&self) -> bool {
        self.origin == AcquisitionOrigin::PreMarriage
            || self.acquired_before_marriage == Some(true)
    }

    /// Received free of charge (gift or inheritance)
    pub fn is_gratuitous(&self) -> bool {
        matches!(
            self.origin,
            AcquisitionOrigin::Gift | AcquisitionOrigin::Inheritance
        )
    }
}

/// A debt of a decedent's estate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: DebtId,
    pub decedent_id: PersonId,
    pub description: String,
    pub amount: Money,
}

/// The complete input of one inventory run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryCase {
    #[serde(default)]
    pub case_id: CaseId,
    #[serde(default)]
    pub currency: Currency,
    pub decedents: Vec<Decedent>,
    #[serde(default)]
    pub heirs: Vec<Heir>,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub debts: Vec<Debt>,
    /// Jurisdiction code to tax rate (decimal fraction)
    #[serde(default)]
    pub tax_rate_overrides: BTreeMap<String, Decimal>,
    #[serde(default)]
    pub litigation_declared: bool,
    /// Heir to the specific asset they should receive
    #[serde(default)]
    pub custom_partition: BTreeMap<PersonId, AssetId>,
}

impl InventoryCase {
    pub fn decedent(&self, id: PersonId) -> Option<&Decedent> {
        self.decedents.iter().find(|d| d.id == id)
    }

    pub fn is_decedent(&self, id: PersonId) -> bool {
        self.decedents.iter().any(|d| d.id == id)
    }

    pub fn heirs_of(&self, decedent_id: PersonId) -> Vec<&Heir> {
        self.heirs.iter().filter(|h| h.decedent_id == decedent_id).collect()
    }

    pub fn assets_of(&self, decedent_id: PersonId) -> Vec<&Asset> {
        self.assets.iter().filter(|a| a.decedent_id == decedent_id).collect()
    }

    pub fn debts_of(&self, decedent_id: PersonId) -> Vec<&Debt> {
        self.debts.iter().filter(|d| d.decedent_id == decedent_id).collect()
    }
}
