//! Conflict records accumulated during one merge run.

use serde::{Deserialize, Serialize};

/// A recorded, non-fatal disagreement between two edits to the same field.
///
/// The merge resolves every conflict deterministically; the record exists so
/// a reviewer can see what won, what lost, and what the ancestor said.
/// Conflicts live for the duration of one merge call and are never persisted
/// by the engines themselves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Matching key of the entry the field belongs to.
    pub entry_id: String,
    /// Path of the field within the entry, e.g. `sense[123]/gloss[a]`.
    pub field: String,
    /// Our side's value for the field (`None` when ours deleted it).
    pub ours: Option<String>,
    /// Their side's value for the field (`None` when theirs deleted it).
    pub theirs: Option<String>,
    /// The common-ancestor value, when one existed.
    pub ancestor: Option<String>,
    /// Human-readable account of how the conflict was resolved.
    pub description: String,
}

impl std::fmt::Display for Conflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}: {}",
            self.entry_id, self.field, self.description
        )
    }
}

/// Accumulates [`Conflict`]s produced during a merge run.
///
/// Owned by the single merge call that produced it; retrievable once the
/// call completes.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ConflictLog {
    conflicts: Vec<Conflict>,
}

impl ConflictLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one conflict.
    pub fn record(&mut self, conflict: Conflict) {
        tracing::debug!(entry = %conflict.entry_id, field = %conflict.field, "conflict recorded");
        self.conflicts.push(conflict);
    }

    /// Record a batch of conflicts from one entry merge.
    pub fn extend(&mut self, conflicts: impl IntoIterator<Item = Conflict>) {
        for conflict in conflicts {
            self.record(conflict);
        }
    }

    /// The recorded conflicts, in the order they were produced.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// Number of recorded conflicts.
    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    /// Returns `true` if no conflicts were recorded.
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Consume the log, yielding the records.
    pub fn into_conflicts(self) -> Vec<Conflict> {
        self.conflicts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(field: &str) -> Conflict {
        Conflict {
            entry_id: "test".into(),
            field: field.into(),
            ours: Some("ours".into()),
            theirs: Some("theirs".into()),
            ancestor: Some("original".into()),
            description: "both sides changed; kept ours".into(),
        }
    }

    #[test]
    fn records_in_order() {
        let mut log = ConflictLog::new();
        assert!(log.is_empty());
        log.record(sample("a"));
        log.extend([sample("b"), sample("c")]);
        assert_eq!(log.len(), 3);
        let fields: Vec<_> = log.conflicts().iter().map(|c| c.field.as_str()).collect();
        assert_eq!(fields, ["a", "b", "c"]);
    }

    #[test]
    fn display_names_entry_and_field() {
        let text = sample("sense[123]/gloss[a]").to_string();
        assert!(text.contains("test"));
        assert!(text.contains("sense[123]/gloss[a]"));
    }
}
