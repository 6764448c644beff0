//! AddCommentHandler - Command handler for posting a section comment.

use std::sync::Arc;

use crate::domain::foundation::{ReportId, UserId};
use crate::domain::report::{Comment, ReportError};
use crate::ports::{CommentRepository, ReportRepository};

/// Command to post a comment on a checklist section.
#[derive(Debug, Clone)]
pub struct AddCommentCommand {
    pub report_id: ReportId,
    pub user_id: UserId,
    pub section_key: String,
    pub comment_text: String,
}

/// Handler for posting comments.
///
/// Any authenticated user may comment on an existing report; comments
/// support review discussion, not just owner notes.
pub struct AddCommentHandler {
    reports: Arc<dyn ReportRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl AddCommentHandler {
    pub fn new(reports: Arc<dyn ReportRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { reports, comments }
    }

    pub async fn handle(&self, cmd: AddCommentCommand) -> Result<Comment, ReportError> {
        let report = self
            .reports
            .find_by_id(&cmd.report_id)
            .await?
            .ok_or(ReportError::NotFound(cmd.report_id))?;

        let comment = Comment::new(
            report.id(),
            cmd.user_id,
            cmd.section_key,
            cmd.comment_text,
        )
        .map_err(|_| ReportError::validation("comment_text", "Comment text is required"))?;

        self.comments.append(&comment).await?;
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCommentRepository, InMemoryReportRepository};
    use crate::domain::foundation::PriorityLevel;
    use crate::domain::report::{QaReport, WebsiteDetails};
    use chrono::NaiveDate;

    async fn setup() -> (AddCommentHandler, Arc<InMemoryCommentRepository>, QaReport) {
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
        let handler = AddCommentHandler::new(reports, comments.clone());
        (handler, comments, report)
    }

    #[tokio::test]
    async fn posts_comment_on_existing_report() {
        let (handler, comments, report) = setup().await;

        let comment = handler
            .handle(AddCommentCommand {
                report_id: report.id(),
                user_id: UserId::new("reviewer-2").unwrap(),
                section_key: "func-forms".to_string(),
                comment_text: "Validation message is cut off on mobile".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(comment.section_key, "func-forms");
        let stored = comments.list_for_report(&report.id(), None).await.unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn blank_comment_is_rejected() {
        let (handler, comments, report) = setup().await;

        let result = handler
            .handle(AddCommentCommand {
                report_id: report.id(),
                user_id: UserId::new("user-1").unwrap(),
                section_key: "func-forms".to_string(),
                comment_text: "   ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ReportError::ValidationFailed { .. })));
        assert!(comments.list_for_report(&report.id(), None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_report_is_not_found() {
        let (handler, _comments, _report) = setup().await;
        let missing = ReportId::new();

        let result = handler
            .handle(AddCommentCommand {
                report_id: missing,
                user_id: UserId::new("user-1").unwrap(),
                section_key: "func-forms".to_string(),
                comment_text: "orphan".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ReportError::NotFound(id)) if id == missing));
    }
}
