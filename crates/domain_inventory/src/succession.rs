//! Heir resolution under intestate succession (CC art. 1.829)
//!
//! # Resolution order
//!
//! ```text
//! descendants (+ concurring spouse) -> ascendants (+ spouse)
//!     -> spouse alone -> siblings -> other collaterals
//! ```
//!
//! The first non-empty tier wins and lower tiers are never evaluated.
//! Predeceased heirs are dropped before the tiers are built; heirs who died
//! simultaneously with the decedent are dropped after. Will beneficiaries
//! are appended to whichever tier won.

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::PersonId;

use crate::model::{Decedent, Heir, Kinship};
use crate::simultaneous::SimultaneousDeathGroups;

/// The succession class that received the estate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessionTier {
    Descendants,
    Ascendants,
    Spouse,
    Siblings,
    OtherCollaterals,
    /// Only testamentary successors remain
    Testamentary,
    /// No successor at all: herança jacente / vacante
    Vacant,
}

impl SuccessionTier {
    pub fn label(&self) -> &'static str {
        match self {
            SuccessionTier::Descendants => "descendants",
            SuccessionTier::Ascendants => "ascendants",
            SuccessionTier::Spouse => "surviving spouse",
            SuccessionTier::Siblings => "siblings",
            SuccessionTier::OtherCollaterals => "other collaterals",
            SuccessionTier::Testamentary => "testamentary successors",
            SuccessionTier::Vacant => "none (vacant estate)",
        }
    }
}

/// Effective heirs of one decedent and how they were selected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeirResolution {
    pub tier: SuccessionTier,
    /// Effective heirs in allocation order
    pub heirs: Vec<Heir>,
    /// A surviving spouse concurs with the winning tier
    pub spouse_concurs: bool,
    pub excluded_predeceased: Vec<PersonId>,
    pub excluded_simultaneous: Vec<PersonId>,
}

impl HeirResolution {
    pub fn is_vacant(&self) -> bool {
        self.heirs.is_empty()
    }

    pub fn heir_count(&self) -> usize {
        self.heirs.len()
    }
}

/// Whether a living spouse or partner is among the heirs
pub fn has_qualifying_spouse(heirs: &[&Heir]) -> bool {
    heirs.iter().any(|h| h.is_qualifying_spouse())
}

/// Resolves the effective heirs of a decedent
///
/// `heirs` are the heirs declared for this decedent.
pub fn resolve_heirs(
    decedent: &Decedent,
    heirs: &[&Heir],
    groups: &SimultaneousDeathGroups,
) -> HeirResolution {
    let (living, predeceased): (Vec<&Heir>, Vec<&Heir>) =
        heirs.iter().copied().partition(|h| !h.predeceased);

    let of_kind = |kinship: Kinship| {
        living
            .iter()
            .copied()
            .filter(|h| h.kinship == kinship)
            .collect::<Vec<_>>()
    };

    let children: Vec<&Heir> = living.iter().copied().filter(|h| h.is_decedent_child()).collect();
    let descendants = if children.is_empty() {
        of_kind(Kinship::Grandchild)
    } else {
        children
    };
    let ascendants = if descendants.is_empty() {
        of_kind(Kinship::Parent)
    } else {
        Vec::new()
    };
    let spouse: Vec<&Heir> = living.iter().copied().filter(|h| h.is_qualifying_spouse()).collect();

    let (tier, mut selected, spouse_concurs) = if !descendants.is_empty() {
        let concurs = !spouse.is_empty() && decedent.regime.spouse_concurs_with_descendants();
        let mut tier_heirs = descendants;
        if concurs {
            tier_heirs.extend(spouse.iter().copied());
        }
        (SuccessionTier::Descendants, tier_heirs, concurs)
    } else if !ascendants.is_empty() {
        let concurs = !spouse.is_empty();
        let mut tier_heirs = ascendants;
        tier_heirs.extend(spouse.iter().copied());
        (SuccessionTier::Ascendants, tier_heirs, concurs)
    } else if !spouse.is_empty() {
        (SuccessionTier::Spouse, spouse, false)
    } else {
        let siblings = of_kind(Kinship::Sibling);
        if !siblings.is_empty() {
            (SuccessionTier::Siblings, siblings, false)
        } else {
            let collaterals = of_kind(Kinship::OtherCollateral);
            if collaterals.is_empty() {
                (SuccessionTier::Vacant, collaterals, false)
            } else {
                (SuccessionTier::OtherCollaterals, collaterals, false)
            }
        }
    };

    let beneficiaries = of_kind(Kinship::WillBeneficiary);
    if selected.is_empty() && !beneficiaries.is_empty() {
        selected = beneficiaries;
        return finish(decedent, SuccessionTier::Testamentary, selected, false, predeceased, groups);
    }
    selected.extend(beneficiaries);

    finish(decedent, tier, selected, spouse_concurs, predeceased, groups)
}

fn finish(
    decedent: &Decedent,
    tier: SuccessionTier,
    selected: Vec<&Heir>,
    spouse_concurs: bool,
    predeceased: Vec<&Heir>,
    groups: &SimultaneousDeathGroups,
) -> HeirResolution {
    let simultaneous = groups.simultaneous_with(decedent.id);
    let (effective, excluded): (Vec<&Heir>, Vec<&Heir>) = selected
        .into_iter()
        .partition(|h| !simultaneous.contains(&h.id));

    let heirs: Vec<Heir> = effective.into_iter().cloned().collect();
    let tier = if heirs.is_empty() { SuccessionTier::Vacant } else { tier };

    debug!(
        decedent = %decedent.id,
        tier = tier.label(),
        heirs = heirs.len(),
        excluded_simultaneous = excluded.len(),
        "Heirs resolved"
    );

    HeirResolution {
        tier,
        spouse_concurs: spouse_concurs && heirs.iter().any(|h| h.is_qualifying_spouse()),
        heirs,
        excluded_predeceased: predeceased.iter().map(|h| h.id).collect(),
        excluded_simultaneous: excluded.iter().map(|h| h.id).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChildType, MaritalStatus, PropertyRegime};
    use chrono::NaiveDate;

    fn decedent(regime: PropertyRegime) -> Decedent {
        Decedent {
            id: PersonId::new(),
            name: "Ana".to_string(),
            date_of_death: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            marital_status: MaritalStatus::Married,
            regime,
            jurisdiction: "SP".to_string(),
            has_will: false,
            will_registered: false,
            simultaneous_group: None,
            death_order: None,
            inherited_from: vec![],
        }
    }

    fn heir(decedent: &Decedent, kinship: Kinship) -> Heir {
        Heir {
            id: PersonId::new(),
            name: kinship.label().to_string(),
            decedent_id: decedent.id,
            kinship,
            child_type: None,
            incapacitated: false,
            predeceased: false,
            will_percentage: None,
        }
    }

    #[test]
    fn test_spouse_concurs_with_children_in_partial_community() {
        let d = decedent(PropertyRegime::PartialCommunity);
        let child = heir(&d, Kinship::Child);
        let spouse = heir(&d, Kinship::Spouse);
        let parent = heir(&d, Kinship::Parent);

        let resolution = resolve_heirs(&d, &[&spouse, &child, &parent], &SimultaneousDeathGroups::default());
        assert_eq!(resolution.tier, SuccessionTier::Descendants);
        assert_eq!(resolution.heirs.len(), 2);
        assert_eq!(resolution.heirs[0].id, child.id);
        assert!(resolution.spouse_concurs);
    }

    #[test]
    fn test_spouse_excluded_from_descendants_in_universal_community() {
        let d = decedent(PropertyRegime::UniversalCommunity);
        let child = heir(&d, Kinship::Child);
        let spouse = heir(&d, Kinship::Spouse);

        let resolution = resolve_heirs(&d, &[&spouse, &child], &SimultaneousDeathGroups::default());
        assert_eq!(resolution.heirs.len(), 1);
        assert!(!resolution.spouse_concurs);
    }

    #[test]
    fn test_grandchildren_only_without_children() {
        let d = decedent(PropertyRegime::PartialCommunity);
        let mut child = heir(&d, Kinship::Child);
        child.predeceased = true;
        let grandchild = heir(&d, Kinship::Grandchild);

        let resolution = resolve_heirs(&d, &[&child, &grandchild], &SimultaneousDeathGroups::default());
        assert_eq!(resolution.heirs.len(), 1);
        assert_eq!(resolution.heirs[0].id, grandchild.id);
        assert_eq!(resolution.excluded_predeceased, vec![child.id]);
    }

    #[test]
    fn test_stepchild_does_not_inherit() {
        let d = decedent(PropertyRegime::PartialCommunity);
        let mut stepchild = heir(&d, Kinship::Child);
        stepchild.child_type = Some(ChildType::ExclusiveSpouse);
        let sibling = heir(&d, Kinship::Sibling);

        let resolution = resolve_heirs(&d, &[&stepchild, &sibling], &SimultaneousDeathGroups::default());
        assert_eq!(resolution.tier, SuccessionTier::Siblings);
    }

    #[test]
    fn test_no_heirs_is_vacant() {
        let d = decedent(PropertyRegime::PartialCommunity);
        let resolution = resolve_heirs(&d, &[], &SimultaneousDeathGroups::default());
        assert!(resolution.is_vacant());
        assert_eq!(resolution.tier, SuccessionTier::Vacant);
    }

    #[test]
    fn test_will_beneficiary_alone_is_testamentary() {
        let d = decedent(PropertyRegime::PartialCommunity);
        let mut beneficiary = heir(&d, Kinship::WillBeneficiary);
        beneficiary.will_percentage = Some(rust_decimal_macros::dec!(0.5));

        let resolution = resolve_heirs(&d, &[&beneficiary], &SimultaneousDeathGroups::default());
        assert_eq!(resolution.tier, SuccessionTier::Testamentary);
        assert_eq!(resolution.heir_count(), 1);
    }
}
