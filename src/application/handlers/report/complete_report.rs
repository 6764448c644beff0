//! CompleteReportHandler - Command handler for the summary wizard step.

use std::sync::Arc;

use crate::domain::foundation::{ReportId, UserId};
use crate::domain::report::{PrioritySummary, QaReport, ReportError};
use crate::ports::ReportRepository;

use super::autosave::ChecklistAutosave;

/// Command to finalize a draft report with its priority summary.
#[derive(Debug, Clone)]
pub struct CompleteReportCommand {
    pub report_id: ReportId,
    pub user_id: UserId,
    pub priority_summary: PrioritySummary,
}

/// Handler for completing reports.
pub struct CompleteReportHandler {
    repository: Arc<dyn ReportRepository>,
    autosave: Arc<ChecklistAutosave>,
}

impl CompleteReportHandler {
    pub fn new(repository: Arc<dyn ReportRepository>, autosave: Arc<ChecklistAutosave>) -> Self {
        Self { repository, autosave }
    }

    pub async fn handle(&self, cmd: CompleteReportCommand) -> Result<QaReport, ReportError> {
        let mut report = self
            .repository
            .find_by_id(&cmd.report_id)
            .await?
            .ok_or(ReportError::NotFound(cmd.report_id))?;

        if !report.is_owned_by(&cmd.user_id) {
            return Err(ReportError::Forbidden);
        }

        report.complete(cmd.priority_summary)?;

        // Flush, not update: a pending debounced checklist write must not
        // land after this and resurrect the draft.
        self.autosave.flush(&report).await?;

        tracing::info!(
            report_id = %report.id(),
            rating = ?report.overall_rating(),
            "completed report"
        );
        Ok(report)
    }
}
