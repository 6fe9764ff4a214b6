//! Per-decedent results and the whole-case report

use serde::{Deserialize, Serialize};

use core_kernel::{CaseId, Money, PersonId};

use crate::alerts::{AlertCode, LegalAlert};
use crate::balance::{EstateBalance, MaritalShare};
use crate::classification::ClassifiedAsset;
use crate::complexity::ComplexityAssessment;
use crate::fees::FeeEstimate;
use crate::model::PropertyRegime;
use crate::partition::PartitionEntry;
use crate::procedure::ProcedureDecision;
use crate::quota::Quota;
use crate::succession::SuccessionTier;
use crate::tax::ResolvedRate;
use crate::trail::DecisionStep;

/// Everything computed for one decedent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecedentResult {
    pub decedent_id: PersonId,
    pub decedent_name: String,
    pub regime: PropertyRegime,
    pub jurisdiction: String,

    pub community_assets: Vec<ClassifiedAsset>,
    pub separate_assets: Vec<ClassifiedAsset>,
    pub undetermined_assets: Vec<ClassifiedAsset>,

    pub balance: EstateBalance,
    pub marital: MaritalShare,

    pub succession_tier: SuccessionTier,
    pub spouse_concurs: bool,
    pub excluded_predeceased: Vec<PersonId>,
    pub excluded_simultaneous: Vec<PersonId>,
    /// No effective heir: herança vacante
    pub vacant: bool,

    pub tax_rate: ResolvedRate,
    pub quotas: Vec<Quota>,
    pub total_tax: Money,
    pub partition: Vec<PartitionEntry>,

    pub procedure: ProcedureDecision,
    pub alerts: Vec<LegalAlert>,
    /// Whole-case assessment, repeated on each decedent
    pub complexity: ComplexityAssessment,

    pub simultaneous_death: bool,
    pub simultaneous_group: Option<String>,

    pub fees: FeeEstimate,
    pub trail: Vec<DecisionStep>,
    pub narrative: Vec<String>,
}

impl DecedentResult {
    pub fn gross_assets(&self) -> Money {
        self.balance.gross_assets
    }

    pub fn net_estate(&self) -> Money {
        self.balance.net_estate
    }

    pub fn marital_share(&self) -> Money {
        self.marital.marital_share
    }

    pub fn net_inheritance(&self) -> Money {
        self.marital.net_inheritance
    }

    /// Quota of a specific heir
    pub fn quota_of(&self, heir_id: PersonId) -> Option<&Quota> {
        self.quotas.iter().find(|q| q.heir_id == heir_id)
    }

    pub fn has_alert(&self, code: AlertCode) -> bool {
        self.alerts.iter().any(|a| a.code == code)
    }
}

/// Output of one inventory run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryReport {
    pub case_id: CaseId,
    pub complexity: ComplexityAssessment,
    /// One result per decedent, in processing order
    pub results: Vec<DecedentResult>,
    /// Soft validation findings
    pub warnings: Vec<String>,
}

impl InventoryReport {
    pub fn result_for(&self, decedent_id: PersonId) -> Option<&DecedentResult> {
        self.results.iter().find(|r| r.decedent_id == decedent_id)
    }
}
