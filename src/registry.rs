//! Ordered in-memory registries for sources and alerts.
//!
//! Both registries are plain ordered collections owned by the controller;
//! nothing else mutates them. Ordering matters: the dashboard lists entries
//! in insertion order, and the first source becomes active when the current
//! one is deleted.

use tracing::warn;
use uuid::Uuid;

use crate::{Alert, SourceInfo, StateError};

// ---

/// The set of known water sources. Never empty once constructed with at
/// least one entry: `remove` refuses to delete the last source.
#[derive(Debug, Default)]
pub struct SourceRegistry {
    entries: Vec<SourceInfo>,
}

impl SourceRegistry {
    pub fn new(entries: Vec<SourceInfo>) -> Self {
        Self { entries }
    }

    /// Append a source. Id uniqueness is the caller's responsibility; a
    /// duplicate is logged so the gap is visible, but still appended to keep
    /// parity with existing client flows.
    pub fn add(&mut self, source: SourceInfo) {
        // ---
        if self.contains(&source.id) {
            warn!("Adding source with duplicate id '{}'", source.id);
        }
        self.entries.push(source);
    }

    /// Remove the source with the given id.
    ///
    /// The minimum-one check runs before the id lookup, so deleting from a
    /// single-entry registry is refused even for unknown ids.
    pub fn remove(&mut self, id: &str) -> Result<SourceInfo, StateError> {
        // ---
        if self.entries.len() <= 1 {
            return Err(StateError::LastSource);
        }
        let position = self
            .entries
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| StateError::SourceNotFound { id: id.to_string() })?;
        Ok(self.entries.remove(position))
    }

    pub fn find(&self, id: &str) -> Option<&SourceInfo> {
        self.entries.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Id of the first entry in display order.
    pub fn first_id(&self) -> Option<&str> {
        self.entries.first().map(|s| s.id.as_str())
    }

    pub fn as_slice(&self) -> &[SourceInfo] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---

/// Active alerts, newest-first as seeded. Dismissal deletes the entry
/// outright; there is no dismissed-but-retained state.
#[derive(Debug, Default)]
pub struct AlertRegistry {
    entries: Vec<Alert>,
}

impl AlertRegistry {
    pub fn new(entries: Vec<Alert>) -> Self {
        Self { entries }
    }

    /// Remove the alert with the given id. Returns whether anything was
    /// removed; an unknown id is an idempotent no-op, not an error.
    pub fn dismiss(&mut self, id: &Uuid) -> bool {
        // ---
        let before = self.entries.len();
        self.entries.retain(|a| a.id != *id);
        self.entries.len() != before
    }

    /// Badge count shown in the navigation; always the collection length.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn as_slice(&self) -> &[Alert] {
        &self.entries
    }
}
