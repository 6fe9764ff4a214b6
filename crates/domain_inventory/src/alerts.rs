//! Structured legal alerts attached to each decedent result
//!
//! Alerts never change the computation; they flag conditions a lawyer must
//! look at before filing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::balance::EstateBalance;
use crate::classification::PatrimonySplit;
use crate::model::{AcquisitionOrigin, AssetCategory, ChildType, Decedent, Heir};
use crate::succession::HeirResolution;

/// Alert severity, used by the presentation layer for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// Condition that raised an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCode {
    BlendedFamily,
    Subrogation,
    BusinessValuation,
    Incapacity,
    RuralLand,
    SimultaneousDeath,
    OrderOfOperations,
    VacantEstate,
    UndeterminedClassification,
    Lien,
    SuccessiveDeath,
    UnregisteredWill,
    InsolventEstate,
}

/// A warning keyed to a specific domain condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalAlert {
    pub code: AlertCode,
    pub severity: Severity,
    pub message: String,
}

impl LegalAlert {
    pub fn new(code: AlertCode, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            code,
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for LegalAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.severity, self.message)
    }
}

/// Everything the alert rules look at for one decedent
pub struct AlertContext<'a> {
    pub decedent: &'a Decedent,
    /// Heirs declared for the decedent, before resolution
    pub declared_heirs: &'a [&'a Heir],
    pub split: &'a PatrimonySplit,
    pub balance: &'a EstateBalance,
    pub resolution: &'a HeirResolution,
    /// Set when the decedent died simultaneously with another decedent
    pub simultaneous_group: Option<&'a str>,
    /// Effective heirs that are themselves decedents of the case
    pub chained_heirs: usize,
}

/// Evaluates every alert rule for one decedent
pub fn collect_alerts(ctx: &AlertContext<'_>) -> Vec<LegalAlert> {
    let mut alerts = vec![LegalAlert::new(
        AlertCode::OrderOfOperations,
        Severity::Info,
        "The marital share is separated before the inheritance is divided; it is not part of any heir's quota",
    )];

    let has_child = |kind: ChildType| {
        ctx.declared_heirs
            .iter()
            .any(|h| !h.predeceased && h.child_type == Some(kind))
    };
    if has_child(ChildType::ExclusiveDecedent) || has_child(ChildType::ExclusiveSpouse) {
        alerts.push(LegalAlert::new(
            AlertCode::BlendedFamily,
            Severity::Warning,
            "Blended family: children of only one spouse are involved; stepchildren do not inherit from the decedent",
        ));
    }

    if ctx.declared_heirs.iter().any(|h| !h.predeceased && h.incapacitated) {
        alerts.push(LegalAlert::new(
            AlertCode::Incapacity,
            Severity::Critical,
            "Incapacitated heir: court procedure with Public Prosecutor intervention is mandatory",
        ));
    }

    if ctx.decedent.has_unprobated_will() {
        alerts.push(LegalAlert::new(
            AlertCode::UnregisteredWill,
            Severity::Critical,
            "The will must be opened and registered in court before the inventory",
        ));
    }

    let assets = || ctx.split.iter().map(|c| &c.asset);

    if assets().any(|a| a.origin == AcquisitionOrigin::Subrogation) {
        alerts.push(LegalAlert::new(
            AlertCode::Subrogation,
            Severity::Warning,
            "Subrogated asset: documentary proof that it replaced separate property is required",
        ));
    }

    if assets().any(|a| a.category == AssetCategory::BusinessInterest) {
        alerts.push(LegalAlert::new(
            AlertCode::BusinessValuation,
            Severity::Warning,
            "Company interest: a balance sheet or business valuation is required",
        ));
    }

    if assets().any(|a| a.category == AssetCategory::RuralProperty) {
        alerts.push(LegalAlert::new(
            AlertCode::RuralLand,
            Severity::Warning,
            "Rural property: check CCIR/ITR registration and the minimum parcel size before partition",
        ));
    }

    let liens = assets().filter(|a| a.has_lien).count();
    if liens > 0 {
        alerts.push(LegalAlert::new(
            AlertCode::Lien,
            Severity::Warning,
            format!("{} asset(s) encumbered by a lien", liens),
        ));
    }

    if !ctx.split.undetermined.is_empty() {
        alerts.push(LegalAlert::new(
            AlertCode::UndeterminedClassification,
            Severity::Warning,
            format!(
                "{} asset(s) could not be classified and need legal review",
                ctx.split.undetermined.len()
            ),
        ));
    }

    if ctx.balance.clamped {
        alerts.push(LegalAlert::new(
            AlertCode::InsolventEstate,
            Severity::Warning,
            format!(
                "Debts ({}) exceed assets ({}); heirs are not liable beyond the estate",
                ctx.balance.total_debts, ctx.balance.gross_assets
            ),
        ));
    }

    if let Some(group) = ctx.simultaneous_group {
        alerts.push(LegalAlert::new(
            AlertCode::SimultaneousDeath,
            Severity::Critical,
            format!(
                "Simultaneous death (group {}): no inheritance passes between its members",
                group
            ),
        ));
    }

    if ctx.balance.inherited_amount.is_positive() || ctx.chained_heirs > 0 {
        alerts.push(LegalAlert::new(
            AlertCode::SuccessiveDeath,
            Severity::Info,
            "Successive deaths: quotas of deceased heirs are carried into their own inventories",
        ));
    }

    if ctx.resolution.is_vacant() {
        alerts.push(LegalAlert::new(
            AlertCode::VacantEstate,
            Severity::Critical,
            "No heirs found: the estate is vacant and passes to the State",
        ));
    }

    alerts
}
