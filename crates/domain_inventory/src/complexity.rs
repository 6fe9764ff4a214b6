//! Case complexity scoring
//!
//! The score is computed once for the whole case, not per decedent. Each
//! matched factor adds a fixed weight; the total is then bucketed into a
//! category with an indicative duration range in months.

use serde::{Deserialize, Serialize};

use crate::model::{AcquisitionOrigin, AssetCategory, ChildType, InventoryCase};
use crate::simultaneous::SimultaneousDeathGroups;

/// Complexity category of a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityCategory {
    Simple,
    Moderate,
    Complex,
    /// High successorial complexity
    High,
}

impl ComplexityCategory {
    /// Buckets a score
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=30 => ComplexityCategory::Simple,
            31..=60 => ComplexityCategory::Moderate,
            61..=90 => ComplexityCategory::Complex,
            _ => ComplexityCategory::High,
        }
    }

    /// Estimated duration in months, inclusive
    pub fn estimated_months(&self) -> (u32, u32) {
        match self {
            ComplexityCategory::Simple => (1, 4),
            ComplexityCategory::Moderate => (4, 12),
            ComplexityCategory::Complex => (12, 36),
            ComplexityCategory::High => (24, 60),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplexityCategory::Simple => "Simple",
            ComplexityCategory::Moderate => "Moderate",
            ComplexityCategory::Complex => "Complex",
            ComplexityCategory::High => "High sucessorial complexity",
        }
    }
}

/// One weighted factor that contributed to the score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityFactor {
    pub name: String,
    pub points: u32,
    pub message: String,
}

impl ComplexityFactor {
    fn new(name: &str, points: u32, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            points,
            message: message.into(),
        }
    }
}

/// Whole-case complexity assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityAssessment {
    pub score: u32,
    pub category: ComplexityCategory,
    pub estimated_months_min: u32,
    pub estimated_months_max: u32,
    pub factors: Vec<ComplexityFactor>,
}

impl ComplexityAssessment {
    /// Builds an assessment from matched factors
    pub fn from_factors(factors: Vec<ComplexityFactor>) -> Self {
        let score = factors.iter().map(|f| f.points).sum();
        let category = ComplexityCategory::from_score(score);
        let (min, max) = category.estimated_months();
        Self {
            score,
            category,
            estimated_months_min: min,
            estimated_months_max: max,
            factors,
        }
    }
}

/// Number of assets above which a case gains the volume factor
const LARGE_ESTATE_ASSET_COUNT: usize = 10;

/// Whether any estate flows into another decedent's estate
///
/// Declared links and death orders count, as does an heir that is itself one
/// of the case's decedents, unless the two died simultaneously.
fn has_successive_chain(case: &InventoryCase, groups: &SimultaneousDeathGroups) -> bool {
    let declared = case
        .decedents
        .iter()
        .any(|d| !d.inherited_from.is_empty() || d.death_order.is_some());

    declared
        || case.heirs.iter().any(|h| {
            h.id != h.decedent_id
                && !h.predeceased
                && case.is_decedent(h.id)
                && !groups.are_simultaneous(h.decedent_id, h.id)
        })
}

/// Evaluates every complexity factor of a case
///
/// # Arguments
///
/// * `case` - The full inventory case
/// * `groups` - Simultaneous-death groups detected for the case
///
/// # Returns
///
/// The matched factors, in evaluation order
pub fn evaluate_complexity_factors(
    case: &InventoryCase,
    groups: &SimultaneousDeathGroups,
) -> Vec<ComplexityFactor> {
    let mut factors = Vec::new();

    if groups.is_present() {
        factors.push(ComplexityFactor::new(
            "simultaneous_death",
            30,
            "Simultaneous-death group declared",
        ));
    }

    if has_successive_chain(case, groups) {
        factors.push(ComplexityFactor::new(
            "successive_deaths",
            25,
            "Chain of successive deaths",
        ));
    }

    if case
        .assets
        .iter()
        .any(|a| a.category == AssetCategory::BusinessInterest)
    {
        factors.push(ComplexityFactor::new(
            "business_interest",
            20,
            "Company interest requires valuation",
        ));
    }

    if case.heirs.iter().any(|h| h.incapacitated) {
        factors.push(ComplexityFactor::new(
            "incapacitated_heir",
            15,
            "Incapacitated heir",
        ));
    }

    if case.litigation_declared {
        factors.push(ComplexityFactor::new(
            "litigation",
            20,
            "Litigation declared among the parties",
        ));
    }

    let has_child = |kind: ChildType| case.heirs.iter().any(|h| h.child_type == Some(kind));
    match (
        has_child(ChildType::ExclusiveDecedent),
        has_child(ChildType::ExclusiveSpouse),
    ) {
        (true, true) => factors.push(ComplexityFactor::new(
            "blended_family",
            20,
            "Exclusive children on both sides",
        )),
        (true, false) | (false, true) => factors.push(ComplexityFactor::new(
            "blended_family",
            10,
            "Exclusive children on one side",
        )),
        (false, false) => {}
    }

    if case.assets.len() > LARGE_ESTATE_ASSET_COUNT {
        factors.push(ComplexityFactor::new(
            "asset_volume",
            10,
            format!("{} assets declared", case.assets.len()),
        ));
    }

    if case.decedents.iter().any(|d| d.has_will) {
        factors.push(ComplexityFactor::new("will", 10, "Testamentary succession"));
    }

    if case.assets.iter().any(|a| {
        a.origin == AcquisitionOrigin::Subrogation || a.incommunicability_clause
    }) {
        factors.push(ComplexityFactor::new(
            "protected_assets",
            5,
            "Subrogated or clause-protected assets",
        ));
    }

    factors
}

/// Scores a whole case
pub fn assess_complexity(
    case: &InventoryCase,
    groups: &SimultaneousDeathGroups,
) -> ComplexityAssessment {
    ComplexityAssessment::from_factors(evaluate_complexity_factors(case, groups))
}
