//! Report types for reconciliation
//!
//! Reports describe what a reconciliation pass found and did; they are for
//! the invoking framework and for audit output, never consulted for
//! control decisions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of reconciling one group resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// Current membership already satisfies the declaration
    InSync,
    /// Membership was rewritten to the computed target
    Changed,
    /// Dry run: membership differs but nothing was written
    WouldChange,
}

/// Human-readable "is" and "should" text for one membership change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeDescription {
    /// Rendering of the observed current membership
    pub current: String,
    /// Rendering of the membership that will be (or would be) applied
    pub desired: String,
}

impl fmt::Display for ChangeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.current, self.desired)
    }
}

/// Report from reconciling one group resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileReport {
    /// Name of the reconciled group
    pub group: String,
    /// Outcome of the pass
    pub status: SyncStatus,
    /// Change text, present whenever the membership differed
    pub change: Option<ChangeDescription>,
    /// Membership actually written, present only for [`SyncStatus::Changed`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied: Option<Vec<String>>,
}

impl ReconcileReport {
    /// Report for a group whose membership already satisfied the declaration
    pub fn in_sync(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            status: SyncStatus::InSync,
            change: None,
            applied: None,
        }
    }

    /// Whether this pass wrote (or, dry-run, would have written) membership
    pub fn changed(&self) -> bool {
        !matches!(self.status, SyncStatus::InSync)
    }
}

/// Options for a reconciliation pass
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// If true, report what would change without writing anything
    pub dry_run: bool,
}
