//! Revision records - append-only audit snapshots of post-completion edits.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OverallRating, ReportId, RevisionId, Timestamp, UserId};

use super::priority_summary::PrioritySummary;

/// Snapshot of the derived fields a revision wrote, kept for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionChanges {
    pub priority_summary: PrioritySummary,
    pub overall_rating: Option<OverallRating>,
    pub next_steps: Vec<String>,
}

/// An append-only audit record of a report edit.
///
/// Never mutated or deleted; does not affect report state.
#[derive(Debug, Clone)]
pub struct Revision {
    pub id: RevisionId,
    pub report_id: ReportId,
    pub revised_by: UserId,
    pub revised_at: Timestamp,
    pub changes: RevisionChanges,
    pub revision_note: Option<String>,
}

impl Revision {
    /// Creates a revision snapshot for a report edit.
    pub fn new(
        report_id: ReportId,
        revised_by: UserId,
        changes: RevisionChanges,
        revision_note: Option<String>,
    ) -> Self {
        Self {
            id: RevisionId::new(),
            report_id,
            revised_by,
            revised_at: Timestamp::now(),
            changes,
            revision_note,
        }
    }
}
