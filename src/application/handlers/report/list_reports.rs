//! ListReportsHandler - Query handler for the dashboard listing.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::report::{QaReport, ReportError};
use crate::ports::ReportRepository;

/// Query for all reports owned by a user, newest first.
#[derive(Debug, Clone)]
pub struct ListReportsQuery {
    pub user_id: UserId,
}

/// Handler for listing a user's reports.
pub struct ListReportsHandler {
    repository: Arc<dyn ReportRepository>,
}

impl ListReportsHandler {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListReportsQuery) -> Result<Vec<QaReport>, ReportError> {
        let reports = self.repository.find_by_owner(&query.user_id).await?;
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryReportRepository;
    use crate::domain::foundation::PriorityLevel;
    use crate::domain::report::WebsiteDetails;
    use crate::ports::ReportRepository as _;
    use chrono::NaiveDate;

    fn report_for(owner: &str, name: &str) -> QaReport {
        QaReport::new(
            UserId::new(owner).unwrap(),
            WebsiteDetails {
                website_name: name.to_string(),
                url: "https://acme.example".to_string(),
                date_reviewed: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
                reviewer_name: "Jordan Reyes".to_string(),
            },
            PriorityLevel::Low,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn lists_only_own_reports() {
        let repo = Arc::new(InMemoryReportRepository::new());
        repo.save(&report_for("user-1", "Mine")).await.unwrap();
        repo.save(&report_for("user-2", "Theirs")).await.unwrap();

        let handler = ListReportsHandler::new(repo);
        let reports = handler
            .handle(ListReportsQuery {
                user_id: UserId::new("user-1").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].details().website_name, "Mine");
    }

    #[tokio::test]
    async fn empty_for_new_user() {
        let repo = Arc::new(InMemoryReportRepository::new());
        let handler = ListReportsHandler::new(repo);

        let reports = handler
            .handle(ListReportsQuery {
                user_id: UserId::new("user-1").unwrap(),
            })
            .await
            .unwrap();

        assert!(reports.is_empty());
    }
}
