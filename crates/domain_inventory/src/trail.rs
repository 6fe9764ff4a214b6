//! Twelve-step decision trail
//!
//! Renders the decisions already taken for a decedent as ordered,
//! human-readable steps with their legal basis. The trail explains the
//! computation; it never feeds back into it.

use serde::{Deserialize, Serialize};

use crate::result::DecedentResult;
use crate::tax::RateSource;

/// One explanatory step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionStep {
    pub number: u8,
    pub title: String,
    pub detail: String,
    pub legal_basis: Option<String>,
}

fn step(number: u8, title: &str, detail: String, legal_basis: Option<&str>) -> DecisionStep {
    DecisionStep {
        number,
        title: title.to_string(),
        detail,
        legal_basis: legal_basis.map(str::to_string),
    }
}

/// Builds the trail from a computed result
pub fn decision_trail(result: &DecedentResult) -> Vec<DecisionStep> {
    let balance = &result.balance;
    let marital = &result.marital;

    let debts_detail = if balance.clamped {
        format!(
            "Debts of {} exceed the gross estate; net estate floored at {}",
            balance.total_debts, balance.net_estate
        )
    } else {
        format!(
            "Debts of {} deducted; net estate {}",
            balance.total_debts, balance.net_estate
        )
    };

    let marital_detail = if marital.marital_share.is_zero() {
        "No marital share: no surviving spouse or the regime keeps property separate".to_string()
    } else {
        format!(
            "Surviving spouse keeps {} (half of {} in community property)",
            marital.marital_share, marital.community_total
        )
    };

    let heirs_detail = if result.vacant {
        "No effective heir; the estate is vacant".to_string()
    } else {
        format!(
            "{} heir(s) from {}{}",
            result.quotas.len(),
            result.succession_tier.label(),
            if result.spouse_concurs { ", spouse concurring" } else { "" }
        )
    };

    let simultaneous_detail = match &result.simultaneous_group {
        Some(group) => format!(
            "Simultaneous death in group {}; {} heir(s) excluded",
            group,
            result.excluded_simultaneous.len()
        ),
        None => "No simultaneous death".to_string(),
    };

    let quota_detail = result
        .quotas
        .iter()
        .map(|q| format!("{}: {}", q.heir_name, q.value))
        .collect::<Vec<_>>()
        .join("; ");

    let source = match result.tax_rate.source {
        RateSource::Override => "case override",
        RateSource::Table => "state table",
        RateSource::Default => "default rate",
    };

    let procedure_detail = if result.procedure.reasons.is_empty() {
        "Notarial deed available: no rule requires court".to_string()
    } else {
        format!(
            "Court required: {}",
            result
                .procedure
                .reasons
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        )
    };

    vec![
        step(
            1,
            "Marital property regime",
            format!("Regime: {}", result.regime.label()),
            Some(result.regime.legal_basis()),
        ),
        step(
            2,
            "Asset classification",
            format!(
                "{} community, {} separate, {} needing review",
                result.community_assets.len(),
                result.separate_assets.len(),
                result.undetermined_assets.len()
            ),
            Some("CC arts. 1.659, 1.668 and 1.848"),
        ),
        step(
            3,
            "Gross estate (monte-mor)",
            format!(
                "{} in assets plus {} inherited: {}",
                balance.asset_total, balance.inherited_amount, balance.gross_assets
            ),
            Some("CC art. 1.784"),
        ),
        step(4, "Debts", debts_detail, Some("CC art. 1.997")),
        step(5, "Marital share", marital_detail, Some("CC arts. 1.658 and 1.667")),
        step(
            6,
            "Net inheritance",
            format!("{} to be divided among heirs", marital.net_inheritance),
            Some("CC art. 1.846"),
        ),
        step(7, "Heir resolution", heirs_detail, Some("CC art. 1.829")),
        step(8, "Simultaneous-death check", simultaneous_detail, Some("CC art. 8")),
        step(
            9,
            "Quota allocation",
            if quota_detail.is_empty() { "No quotas".to_string() } else { quota_detail },
            Some("CC arts. 1.832-1.835"),
        ),
        step(
            10,
            "Transfer tax (ITCMD)",
            format!(
                "{} in {} ({}); total {}",
                result.tax_rate.jurisdiction_rate, result.jurisdiction, source, result.total_tax
            ),
            Some("CF art. 155, I"),
        ),
        step(11, "Procedure", procedure_detail, Some("CPC art. 610")),
        step(
            12,
            "Complexity and fees",
            format!(
                "Score {} ({}); recommended fee {} at {}",
                result.complexity.score,
                result.complexity.category.label(),
                result.fees.recommended,
                result.fees.applied_rate
            ),
            None,
        ),
    ]
}
