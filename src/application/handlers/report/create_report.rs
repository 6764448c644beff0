//! CreateReportHandler - Command handler for starting a new QA report.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::{PriorityLevel, UserId};
use crate::domain::report::{QaReport, ReportError, WebsiteDetails};
use crate::ports::ReportRepository;

/// Command to create a new draft report.
#[derive(Debug, Clone)]
pub struct CreateReportCommand {
    pub created_by: UserId,
    pub website_name: String,
    pub url: String,
    pub date_reviewed: NaiveDate,
    pub reviewer_name: String,
    pub priority_level: PriorityLevel,
}

/// Handler for creating reports.
pub struct CreateReportHandler {
    repository: Arc<dyn ReportRepository>,
}

impl CreateReportHandler {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateReportCommand) -> Result<QaReport, ReportError> {
        let report = QaReport::new(
            cmd.created_by,
            WebsiteDetails {
                website_name: cmd.website_name,
                url: cmd.url,
                date_reviewed: cmd.date_reviewed,
                reviewer_name: cmd.reviewer_name,
            },
            cmd.priority_level,
        )?;

        self.repository.save(&report).await?;

        tracing::info!(report_id = %report.id(), "created draft report");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryReportRepository;
    use crate::domain::foundation::ReportStatus;

    fn command(owner: &str) -> CreateReportCommand {
        CreateReportCommand {
            created_by: UserId::new(owner).unwrap(),
            website_name: "Acme Storefront".to_string(),
            url: "https://acme.example".to_string(),
            date_reviewed: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
            reviewer_name: "Jordan Reyes".to_string(),
            priority_level: PriorityLevel::Medium,
        }
    }

    #[tokio::test]
    async fn creates_draft_with_template_checklist() {
        let repo = Arc::new(InMemoryReportRepository::new());
        let handler = CreateReportHandler::new(repo.clone());

        let report = handler.handle(command("user-1")).await.unwrap();

        assert_eq!(report.status(), ReportStatus::Draft);
        assert!(report.checklist().total_items() > 0);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn rejects_invalid_url() {
        let repo = Arc::new(InMemoryReportRepository::new());
        let handler = CreateReportHandler::new(repo.clone());

        let result = handler
            .handle(CreateReportCommand {
                url: "acme.example".to_string(),
                ..command("user-1")
            })
            .await;

        assert!(matches!(
            result,
            Err(ReportError::ValidationFailed { ref field, .. }) if field == "url"
        ));
        assert!(repo.is_empty());
    }
}
