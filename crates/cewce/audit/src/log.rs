//! The append-only audit log and its query surface

use crate::AuditEntry;
use cewce_types::{InstanceId, UserId};
use serde::{Deserialize, Serialize};

/// Optional criteria for narrowing an audit listing.
///
/// `search` matches case-insensitively against the instance title and
/// the actor display name; `action` matches the action label exactly.
/// Absent criteria match everything.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AuditFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl AuditFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Whether an entry satisfies all present criteria
    pub fn matches(&self, entry: &AuditEntry) -> bool {
        let matches_search = match &self.search {
            None => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                entry.instance_title.to_lowercase().contains(&needle)
                    || entry
                        .actor
                        .display_name
                        .as_ref()
                        .is_some_and(|name| name.to_lowercase().contains(&needle))
            }
        };
        let matches_action = match &self.action {
            None => true,
            Some(action) => &entry.action == action,
        };
        matches_search && matches_action
    }
}

/// An append-only, insertion-ordered collection of audit entries
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from already-ordered entries (oldest first)
    pub fn from_entries(entries: Vec<AuditEntry>) -> Self {
        Self { entries }
    }

    /// Append an entry. There is no removal or mutation.
    pub fn append(&mut self, entry: AuditEntry) {
        self.entries.push(entry);
    }

    /// All entries in append order
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The trail of a single workflow instance, in append order
    pub fn for_instance(&self, instance: &InstanceId) -> Vec<&AuditEntry> {
        self.entries
            .iter()
            .filter(|e| &e.instance_id == instance)
            .collect()
    }

    /// Entries recorded by a given actor, in append order
    pub fn by_actor(&self, actor: &UserId) -> Vec<&AuditEntry> {
        self.entries.iter().filter(|e| &e.actor.id == actor).collect()
    }

    /// The most recently appended `n` entries, newest first
    pub fn recent(&self, n: usize) -> Vec<&AuditEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    /// Entries matching a filter, in append order
    pub fn filter(&self, filter: &AuditFilter) -> Vec<&AuditEntry> {
        self.entries.iter().filter(|e| filter.matches(e)).collect()
    }
}
