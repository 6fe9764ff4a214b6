//! Simultaneous-death (comoriência) detection
//!
//! Decedents sharing a group id died in circumstances where survivorship
//! cannot be established (CC art. 8) and do not inherit from each other.
//!
//! A declared group with fewer than two members is discarded. Within a
//! group, two decedents are mutually simultaneous only when *neither* has an
//! explicit death-order index: an explicit order means the deaths were
//! sequential, even if the caller also put them in the same group.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::PersonId;

use crate::model::Decedent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Member {
    id: PersonId,
    has_death_order: bool,
}

/// Simultaneous-death groups declared in one case
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimultaneousDeathGroups {
    groups: BTreeMap<String, Vec<Member>>,
}

impl SimultaneousDeathGroups {
    /// Groups decedents by their declared group id
    pub fn detect(decedents: &[Decedent]) -> Self {
        let mut groups: BTreeMap<String, Vec<Member>> = BTreeMap::new();

        for decedent in decedents {
            if let Some(group) = &decedent.simultaneous_group {
                groups.entry(group.clone()).or_default().push(Member {
                    id: decedent.id,
                    has_death_order: decedent.death_order.is_some(),
                });
            }
        }

        groups.retain(|_, members| members.len() >= 2);
        Self { groups }
    }

    /// At least one group with two or more members was declared
    pub fn is_present(&self) -> bool {
        !self.groups.is_empty()
    }

    /// Retained group ids
    pub fn group_ids(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Group id of a decedent, if it belongs to a retained group
    pub fn group_of(&self, id: PersonId) -> Option<&str> {
        self.groups
            .iter()
            .find(|(_, members)| members.iter().any(|m| m.id == id))
            .map(|(group, _)| group.as_str())
    }

    /// Whether two decedents died simultaneously
    pub fn are_simultaneous(&self, a: PersonId, b: PersonId) -> bool {
        a != b
            && self.groups.values().any(|members| {
                let find = |id: PersonId| members.iter().find(|m| m.id == id);
                match (find(a), find(b)) {
                    (Some(ma), Some(mb)) => !ma.has_death_order && !mb.has_death_order,
                    _ => false,
                }
            })
    }

    /// Every decedent that died simultaneously with `id`
    pub fn simultaneous_with(&self, id: PersonId) -> Vec<PersonId> {
        self.groups
            .values()
            .flat_map(|members| members.iter().map(|m| m.id))
            .filter(|other| self.are_simultaneous(id, *other))
            .collect()
    }
}
