//! Procedure routing: notarial deed or court inventory
//!
//! Notarial settlement (CPC art. 610 §1) is only available when every rule
//! below passes. Any match forces the in-court procedure; the matched rules
//! are reported in evaluation order.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::PersonId;

use crate::model::{ChildType, Decedent, Heir, Kinship};

/// Legal pathway for settling an estate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Procedure {
    /// Extrajudicial inventory by public deed
    Notarial,
    /// Judicial inventory
    InCourt,
}

impl Procedure {
    pub fn label(&self) -> &'static str {
        match self {
            Procedure::Notarial => "notarial",
            Procedure::InCourt => "in-court",
        }
    }
}

/// A rule that forced the in-court procedure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum ProcedureReason {
    /// Parties declared a conflict or pending litigation
    DeclaredLitigation,
    /// At least one heir lacks legal capacity
    IncapacitatedHeir { heirs: Vec<PersonId> },
    /// The decedent left a will that has not been registered in court
    UnprobatedWill,
    /// A will beneficiary has no declared share
    BeneficiaryWithoutShare { heirs: Vec<PersonId> },
    /// Children exclusive to each spouse are both present
    BlendedFamilyConflict,
}

impl fmt::Display for ProcedureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcedureReason::DeclaredLitigation => write!(f, "Conflict or litigation declared among the parties"),
            ProcedureReason::IncapacitatedHeir { heirs } => {
                write!(f, "{} incapacitated heir(s) require judicial protection", heirs.len())
            }
            ProcedureReason::UnprobatedWill => write!(f, "Will has not been opened and registered in court"),
            ProcedureReason::BeneficiaryWithoutShare { heirs } => {
                write!(f, "{} will beneficiary(ies) without a declared share", heirs.len())
            }
            ProcedureReason::BlendedFamilyConflict => {
                write!(f, "Blended family with exclusive children on both sides")
            }
        }
    }
}

/// Chosen procedure and the rules that forced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureDecision {
    pub procedure: Procedure,
    /// Empty for notarial
    pub reasons: Vec<ProcedureReason>,
}

impl ProcedureDecision {
    pub fn is_in_court(&self) -> bool {
        self.procedure == Procedure::InCourt
    }
}

/// Children exclusive to the decedent and to the spouse are both declared
pub fn has_blended_family_conflict(heirs: &[&Heir]) -> bool {
    let has = |kind: ChildType| heirs.iter().any(|h| h.child_type == Some(kind));
    has(ChildType::ExclusiveDecedent) && has(ChildType::ExclusiveSpouse)
}

/// Decides between notarial and in-court settlement
///
/// `heirs` are all heirs declared for the decedent; predeceased heirs are
/// ignored.
pub fn route_procedure(
    decedent: &Decedent,
    heirs: &[&Heir],
    litigation_declared: bool,
) -> ProcedureDecision {
    let living: Vec<&Heir> = heirs.iter().copied().filter(|h| !h.predeceased).collect();
    let mut reasons = Vec::new();

    if litigation_declared {
        reasons.push(ProcedureReason::DeclaredLitigation);
    }

    let incapacitated: Vec<PersonId> = living
        .iter()
        .filter(|h| h.incapacitated)
        .map(|h| h.id)
        .collect();
    if !incapacitated.is_empty() {
        reasons.push(ProcedureReason::IncapacitatedHeir { heirs: incapacitated });
    }

    if decedent.has_unprobated_will() {
        reasons.push(ProcedureReason::UnprobatedWill);
    }

    let without_share: Vec<PersonId> = living
        .iter()
        .filter(|h| h.kinship == Kinship::WillBeneficiary && h.will_percentage.is_none())
        .map(|h| h.id)
        .collect();
    if !without_share.is_empty() {
        reasons.push(ProcedureReason::BeneficiaryWithoutShare { heirs: without_share });
    }

    if has_blended_family_conflict(&living) {
        reasons.push(ProcedureReason::BlendedFamilyConflict);
    }

    let procedure = if reasons.is_empty() {
        Procedure::Notarial
    } else {
        Procedure::InCourt
    };

    ProcedureDecision { procedure, reasons }
}
