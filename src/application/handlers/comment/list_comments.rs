//! ListCommentsHandler - Query handler for a section's comment thread.

use std::sync::Arc;

use crate::domain::foundation::ReportId;
use crate::domain::report::{Comment, ReportError};
use crate::ports::{CommentRepository, ReportRepository};

/// Query for a report's comments, optionally narrowed to one section.
#[derive(Debug, Clone)]
pub struct ListCommentsQuery {
    pub report_id: ReportId,
    pub section_key: Option<String>,
}

/// Handler for listing comments, oldest first.
pub struct ListCommentsHandler {
    reports: Arc<dyn ReportRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl ListCommentsHandler {
    pub fn new(reports: Arc<dyn ReportRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { reports, comments }
    }

    pub async fn handle(&self, query: ListCommentsQuery) -> Result<Vec<Comment>, ReportError> {
        if self.reports.find_by_id(&query.report_id).await?.is_none() {
            return Err(ReportError::NotFound(query.report_id));
        }

        let comments = self
            .comments
            .list_for_report(&query.report_id, query.section_key.as_deref())
            .await?;
        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCommentRepository, InMemoryReportRepository};
    use crate::domain::foundation::{PriorityLevel, UserId};
    use crate::domain::report::{QaReport, WebsiteDetails};
    use chrono::NaiveDate;

    #[tokio::test]
    async fn filters_by_section_key() {
        let reports = Arc::new(InMemoryReportRepository::new());
        let comments = Arc::new(InMemoryCommentRepository::new());
        let report = QaReport::new(
            UserId::new("user-1").unwrap(),
            WebsiteDetails {
                website_name: "Acme Storefront".to_string(),
                url: "https://acme.example".to_string(),
                date_reviewed: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
                reviewer_name: "Jordan Reyes".to_string(),
            },
            PriorityLevel::Medium,
        )
        .unwrap();
        reports.save(&report).await.unwrap();

        let user = UserId::new("user-1").unwrap();
        for (section, text) in [("func-forms", "first"), ("seo-meta", "second")] {
            comments
                .append(&Comment::new(report.id(), user.clone(), section, text).unwrap())
                .await
                .unwrap();
        }

        let handler = ListCommentsHandler::new(reports, comments);
        let thread = handler
            .handle(ListCommentsQuery {
                report_id: report.id(),
                section_key: Some("seo-meta".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(thread.len(), 1);
        assert_eq!(thread[0].comment_text, "second");
    }

    #[tokio::test]
    async fn unknown_report_is_not_found() {
        let reports = Arc::new(InMemoryReportRepository::new());
        let comments = Arc::new(InMemoryCommentRepository::new());
        let handler = ListCommentsHandler::new(reports, comments);

        let missing = ReportId::new();
        let result = handler
            .handle(ListCommentsQuery {
                report_id: missing,
                section_key: None,
            })
            .await;

        assert!(matches!(result, Err(ReportError::NotFound(id)) if id == missing));
    }
}
