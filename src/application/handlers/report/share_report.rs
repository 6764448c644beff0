//! Share link handlers - issuing tokens and resolving them read-only.
//!
//! Tokens are random and server-issued; knowing a report id is not enough
//! to build a share link. Resolution requires no authentication, which is
//! the whole point of a share link.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::foundation::{ReportId, Timestamp, UserId};
use crate::domain::report::{QaReport, ReportError};
use crate::ports::{ReportRepository, ShareGrant, ShareGrantRepository};

/// Command to issue a share link for an owned report.
#[derive(Debug, Clone)]
pub struct CreateShareLinkCommand {
    pub report_id: ReportId,
    pub user_id: UserId,
}

/// An issued share link token.
#[derive(Debug, Clone)]
pub struct ShareLink {
    pub token: String,
    pub report_id: ReportId,
}

/// Handler for issuing share links.
pub struct CreateShareLinkHandler {
    repository: Arc<dyn ReportRepository>,
    grants: Arc<dyn ShareGrantRepository>,
}

impl CreateShareLinkHandler {
    pub fn new(
        repository: Arc<dyn ReportRepository>,
        grants: Arc<dyn ShareGrantRepository>,
    ) -> Self {
        Self { repository, grants }
    }

    pub async fn handle(&self, cmd: CreateShareLinkCommand) -> Result<ShareLink, ReportError> {
        let report = self
            .repository
            .find_by_id(&cmd.report_id)
            .await?
            .ok_or(ReportError::NotFound(cmd.report_id))?;

        if !report.is_owned_by(&cmd.user_id) {
            return Err(ReportError::Forbidden);
        }

        let grant = ShareGrant {
            token: Uuid::new_v4().simple().to_string(),
            report_id: report.id(),
            created_by: cmd.user_id,
            created_at: Timestamp::now(),
        };
        self.grants.insert(&grant).await?;

        tracing::info!(report_id = %report.id(), "issued share link");
        Ok(ShareLink {
            token: grant.token,
            report_id: report.id(),
        })
    }
}

/// Handler for resolving a share token into a read-only report view.
pub struct ResolveSharedReportHandler {
    repository: Arc<dyn ReportRepository>,
    grants: Arc<dyn ShareGrantRepository>,
}

impl ResolveSharedReportHandler {
    pub fn new(
        repository: Arc<dyn ReportRepository>,
        grants: Arc<dyn ShareGrantRepository>,
    ) -> Self {
        Self { repository, grants }
    }

    pub async fn handle(&self, token: &str) -> Result<QaReport, ReportError> {
        let grant = self
            .grants
            .find_by_token(token)
            .await?
            .ok_or(ReportError::ShareGrantNotFound)?;

        let report = self
            .repository
            .find_by_id(&grant.report_id)
            .await?
            .ok_or(ReportError::NotFound(grant.report_id))?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryReportRepository, InMemoryShareGrantRepository};
    use crate::domain::foundation::PriorityLevel;
    use crate::domain::report::WebsiteDetails;
    use chrono::NaiveDate;

    async fn setup() -> (
        Arc<InMemoryReportRepository>,
        Arc<InMemoryShareGrantRepository>,
        QaReport,
    ) {
        let repo = Arc::new(InMemoryReportRepository::new());
        let grants = Arc::new(InMemoryShareGrantRepository::new());
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
        repo.save(&report).await.unwrap();
        (repo, grants, report)
    }

    #[tokio::test]
    async fn issued_token_resolves_without_auth() {
        let (repo, grants, report) = setup().await;
        let create = CreateShareLinkHandler::new(repo.clone(), grants.clone());
        let resolve = ResolveSharedReportHandler::new(repo, grants);

        let link = create
            .handle(CreateShareLinkCommand {
                report_id: report.id(),
                user_id: UserId::new("user-1").unwrap(),
            })
            .await
            .unwrap();

        let shared = resolve.handle(&link.token).await.unwrap();
        assert_eq!(shared.id(), report.id());
    }

    #[tokio::test]
    async fn tokens_are_not_derived_from_report_id() {
        let (repo, grants, report) = setup().await;
        let create = CreateShareLinkHandler::new(repo, grants);

        let link = create
            .handle(CreateShareLinkCommand {
                report_id: report.id(),
                user_id: UserId::new("user-1").unwrap(),
            })
            .await
            .unwrap();

        assert_ne!(link.token, report.id().to_string());
        assert!(!link.token.contains(&report.id().to_string()));
    }

    #[tokio::test]
    async fn only_owner_can_issue() {
        let (repo, grants, report) = setup().await;
        let create = CreateShareLinkHandler::new(repo, grants);

        let result = create
            .handle(CreateShareLinkCommand {
                report_id: report.id(),
                user_id: UserId::new("intruder").unwrap(),
            })
            .await;

        assert!(matches!(result, Err(ReportError::Forbidden)));
    }

    #[tokio::test]
    async fn unknown_token_is_rejected() {
        let (repo, grants, _report) = setup().await;
        let resolve = ResolveSharedReportHandler::new(repo, grants);

        let result = resolve.handle("definitely-not-a-token").await;
        assert!(matches!(result, Err(ReportError::ShareGrantNotFound)));
    }
}
