//! GetReportHandler - Query handler for loading a single owned report.

use std::sync::Arc;

use crate::domain::foundation::{ReportId, UserId};
use crate::domain::report::{QaReport, ReportError};
use crate::ports::ReportRepository;

/// Query for one report, scoped to its owner.
#[derive(Debug, Clone)]
pub struct GetReportQuery {
    pub report_id: ReportId,
    pub user_id: UserId,
}

/// Handler for loading a report.
pub struct GetReportHandler {
    repository: Arc<dyn ReportRepository>,
}

impl GetReportHandler {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetReportQuery) -> Result<QaReport, ReportError> {
        let report = self
            .repository
            .find_by_id(&query.report_id)
            .await?
            .ok_or(ReportError::NotFound(query.report_id))?;

        if !report.is_owned_by(&query.user_id) {
            return Err(ReportError::Forbidden);
        }

        Ok(report)
    }
}
