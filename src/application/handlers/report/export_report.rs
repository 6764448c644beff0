//! ExportReportHandler - Query handler for the plain-text download.

use std::sync::Arc;

use crate::domain::foundation::{ReportId, UserId};
use crate::domain::report::{render_report_text, ReportError};
use crate::ports::ReportRepository;

/// Query to export an owned report as plain text.
#[derive(Debug, Clone)]
pub struct ExportReportQuery {
    pub report_id: ReportId,
    pub user_id: UserId,
}

/// The rendered export, ready to serve as a download.
#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub filename: String,
    pub body: String,
}

/// Handler for exporting reports.
pub struct ExportReportHandler {
    repository: Arc<dyn ReportRepository>,
}

impl ExportReportHandler {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ExportReportQuery) -> Result<ExportedReport, ReportError> {
        let report = self
            .repository
            .find_by_id(&query.report_id)
            .await?
            .ok_or(ReportError::NotFound(query.report_id))?;

        if !report.is_owned_by(&query.user_id) {
            return Err(ReportError::Forbidden);
        }

        let filename = format!(
            "{}-QA-Report.txt",
            report.details().website_name.replace(char::is_whitespace, "-")
        );
        let body = render_report_text(&report);

        Ok(ExportedReport { filename, body })
    }
}
