//! Change-audit helpers.
//!
//! [`audit`] diffs two versions of a record, emits one `tracing` event per
//! changed field, and returns an [`AuditEntry`] that can be written to an
//! audit log as JSON.

use serde::Serialize;
use shapediff_core::{Differ, Diffable};
use shapediff_types::{DiffError, DiffResult, Result};
use tracing::info;

/// The changes made to one subject, ready for an audit log.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AuditEntry {
    /// What was changed, e.g. `order/42`.
    pub subject: String,
    /// Every changed field, keyed by path.
    pub changes: DiffResult,
}

impl AuditEntry {
    /// Returns `true` if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Render as a single-line JSON document.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| DiffError::Serialization(e.to_string()))
    }
}

/// Diff `old` against `new` for `subject` and log each change.
pub fn audit<T: Diffable>(
    differ: &Differ,
    subject: impl Into<String>,
    old: Option<&T>,
    new: Option<&T>,
) -> Result<AuditEntry> {
    let subject = subject.into();
    let changes = differ.diff(old, new)?;

    for record in changes.records() {
        info!(
            subject = %subject,
            path = record.path(),
            old = record.old_value(),
            new = record.new_value(),
            "field changed"
        );
    }

    Ok(AuditEntry { subject, changes })
}
