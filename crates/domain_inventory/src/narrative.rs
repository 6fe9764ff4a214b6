//! Narrative computation log
//!
//! An ordered list of plain sentences describing what the engine did for one
//! decedent, suitable for audit display. Distinct from `tracing` output.

/// Append-only log of one decedent's computation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NarrativeLog {
    entries: Vec<String>,
}

impl NarrativeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

impl Extend<String> for NarrativeLog {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_keep_order() {
        let mut log = NarrativeLog::new();
        log.push("first");
        log.push(format!("second {}", 2));
        log.extend(vec!["third".to_string()]);
        assert_eq!(log.len(), 3);
        assert_eq!(log.into_entries(), vec!["first", "second 2", "third"]);
    }
}
