//! Property classification and patrimony splitting
//!
//! Decides, asset by asset, whether a decedent's property is shared with the
//! surviving spouse (community) or belongs to the decedent alone (separate),
//! and buckets a decedent's assets accordingly.
//!
//! # Rules (evaluated in order)
//!
//! 1. An incommunicability clause always forces separate.
//! 2. Universal community: community, except gifts and inheritances, which
//!    need review (they may carry a clause not captured in the input).
//! 3. Partial community: pre-marriage, gifted, inherited and subrogated
//!    assets are separate; assets acquired during the marriage are community.
//! 4. Total or mandatory separation: always separate.
//! 5. Final participation: pre-marriage, gifted and inherited assets are
//!    separate; anything else is only settled at dissolution and needs review.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{AcquisitionOrigin, Asset, PropertyRegime};

/// Outcome of classifying one asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Divisible with the surviving spouse
    Community,
    /// Belongs to the decedent alone
    Separate,
    /// Cannot be decided without manual legal review
    NeedsReview,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Community => "community",
            Classification::Separate => "separate",
            Classification::NeedsReview => "needs review",
        }
    }
}

/// Classifies one asset under a marital property regime
///
/// Pure and deterministic.
pub fn classify_asset(asset: &Asset, regime: PropertyRegime) -> Classification {
    if asset.incommunicability_clause {
        return Classification::Separate;
    }

    match regime {
        PropertyRegime::UniversalCommunity => {
            if asset.is_gratuitous() {
                Classification::NeedsReview
            } else {
                Classification::Community
            }
        }
        PropertyRegime::PartialCommunity => {
            if asset.is_pre_marriage()
                || asset.is_gratuitous()
                || asset.origin == AcquisitionOrigin::Subrogation
            {
                Classification::Separate
            } else {
                Classification::Community
            }
        }
        PropertyRegime::ConventionalSeparation | PropertyRegime::MandatorySeparation => {
            Classification::Separate
        }
        PropertyRegime::FinalParticipation => {
            if asset.is_pre_marriage() || asset.is_gratuitous() {
                Classification::Separate
            } else {
                Classification::NeedsReview
            }
        }
    }
}

/// An asset tagged with its computed classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedAsset {
    pub asset: Asset,
    pub classification: Classification,
}

/// A decedent's assets partitioned by classification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatrimonySplit {
    pub community: Vec<ClassifiedAsset>,
    pub separate: Vec<ClassifiedAsset>,
    pub undetermined: Vec<ClassifiedAsset>,
}

impl PatrimonySplit {
    /// Total number of assets across all buckets
    pub fn len(&self) -> usize {
        self.community.len() + self.separate.len() + self.undetermined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every classified asset, community first
    pub fn iter(&self) -> impl Iterator<Item = &ClassifiedAsset> {
        self.community
            .iter()
            .chain(self.separate.iter())
            .chain(self.undetermined.iter())
    }
}

/// Classifies every asset of one decedent and buckets the results
///
/// Never drops an asset; input order is preserved inside each bucket.
pub fn split_patrimony<'a, I>(assets: I, regime: PropertyRegime) -> PatrimonySplit
where
    I: IntoIterator<Item = &'a Asset>,
{
    let mut split = PatrimonySplit::default();

    for asset in assets {
        let classification = classify_asset(asset, regime);
        debug!(asset = %asset.id, ?classification, "Asset classified");

        let tagged = ClassifiedAsset {
            asset: asset.clone(),
            classification,
        };
        match classification {
            Classification::Community => split.community.push(tagged),
            Classification::Separate => split.separate.push(tagged),
            Classification::NeedsReview => split.undetermined.push(tagged),
        }
    }

    split
}
