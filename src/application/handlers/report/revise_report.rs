//! ReviseReportHandler - Command handler for post-completion edits.

use std::sync::Arc;

use crate::domain::foundation::{ReportId, UserId};
use crate::domain::report::{
    PrioritySummary, QaReport, ReportError, Revision, RevisionChanges,
};
use crate::ports::{ReportRepository, RevisionRepository};

/// Command to edit a report's priority summary after the fact.
#[derive(Debug, Clone)]
pub struct ReviseReportCommand {
    pub report_id: ReportId,
    pub user_id: UserId,
    pub priority_summary: PrioritySummary,
    pub revision_note: Option<String>,
}

/// Result of a revision: the updated report and, when a note was given,
/// its audit record.
#[derive(Debug, Clone)]
pub struct ReviseReportResult {
    pub report: QaReport,
    pub revision: Option<Revision>,
}

/// Handler for revising reports.
pub struct ReviseReportHandler {
    repository: Arc<dyn ReportRepository>,
    revisions: Arc<dyn RevisionRepository>,
}

impl ReviseReportHandler {
    pub fn new(
        repository: Arc<dyn ReportRepository>,
        revisions: Arc<dyn RevisionRepository>,
    ) -> Self {
        Self { repository, revisions }
    }

    pub async fn handle(&self, cmd: ReviseReportCommand) -> Result<ReviseReportResult, ReportError> {
        let mut report = self
            .repository
            .find_by_id(&cmd.report_id)
            .await?
            .ok_or(ReportError::NotFound(cmd.report_id))?;

        if !report.is_owned_by(&cmd.user_id) {
            return Err(ReportError::Forbidden);
        }

        report.update_summary(cmd.priority_summary);
        self.repository.update(&report).await?;

        // A blank note means a silent edit: the summary changes, the
        // audit history does not.
        let note = cmd
            .revision_note
            .filter(|note| !note.trim().is_empty());
        let revision = match note {
            Some(note) => {
                let revision = Revision::new(
                    report.id(),
                    cmd.user_id,
                    RevisionChanges {
                        priority_summary: report.priority_summary().clone(),
                        overall_rating: report.overall_rating(),
                        next_steps: report.next_steps().to_vec(),
                    },
                    Some(note),
                );
                self.revisions.append(&revision).await?;
                tracing::info!(
                    report_id = %report.id(),
                    revision_id = %revision.id,
                    "revised report"
                );
                Some(revision)
            }
            None => {
                tracing::info!(report_id = %report.id(), "revised report without note");
                None
            }
        };

        Ok(ReviseReportResult { report, revision })
    }
}

/// Query handler for a report's revision history, newest first.
pub struct ListRevisionsHandler {
    repository: Arc<dyn ReportRepository>,
    revisions: Arc<dyn RevisionRepository>,
}

impl ListRevisionsHandler {
    pub fn new(
        repository: Arc<dyn ReportRepository>,
        revisions: Arc<dyn RevisionRepository>,
    ) -> Self {
        Self { repository, revisions }
    }

    pub async fn handle(
        &self,
        report_id: ReportId,
        user_id: UserId,
    ) -> Result<Vec<Revision>, ReportError> {
        let report = self
            .repository
            .find_by_id(&report_id)
            .await?
            .ok_or(ReportError::NotFound(report_id))?;

        if !report.is_owned_by(&user_id) {
            return Err(ReportError::Forbidden);
        }

        let revisions = self.revisions.list_for_report(&report_id).await?;
        Ok(revisions)
    }
}
