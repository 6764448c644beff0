//! In-memory adapter implementations.
//!
//! Back the ports with plain maps behind a mutex. Used by unit and
//! integration tests, and usable for local development without Postgres.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, ReportId, UserId};
use crate::domain::profile::Profile;
use crate::domain::report::{Comment, QaReport, Revision};
use crate::ports::{
    CommentRepository, ImageStorage, ProfileRepository, ReportRepository, RevisionRepository,
    ShareGrant, ShareGrantRepository, StorageError,
};

/// In-memory ReportRepository.
#[derive(Default)]
pub struct InMemoryReportRepository {
    reports: Mutex<HashMap<ReportId, QaReport>>,
}

impl InMemoryReportRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored reports (test helper).
    pub fn len(&self) -> usize {
        self.reports.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn save(&self, report: &QaReport) -> Result<(), DomainError> {
        self.reports
            .lock()
            .unwrap()
            .insert(report.id(), report.clone());
        Ok(())
    }

    async fn update(&self, report: &QaReport) -> Result<(), DomainError> {
        let mut reports = self.reports.lock().unwrap();
        if !reports.contains_key(&report.id()) {
            return Err(DomainError::new(
                ErrorCode::ReportNotFound,
                format!("Report not found: {}", report.id()),
            ));
        }
        reports.insert(report.id(), report.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ReportId) -> Result<Option<QaReport>, DomainError> {
        Ok(self.reports.lock().unwrap().get(id).cloned())
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<QaReport>, DomainError> {
        let mut reports: Vec<QaReport> = self
            .reports
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.created_by() == owner)
            .cloned()
            .collect();
        reports.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(reports)
    }

    async fn delete(&self, id: &ReportId) -> Result<(), DomainError> {
        if self.reports.lock().unwrap().remove(id).is_none() {
            return Err(DomainError::new(
                ErrorCode::ReportNotFound,
                format!("Report not found: {}", id),
            ));
        }
        Ok(())
    }
}

/// In-memory RevisionRepository.
#[derive(Default)]
pub struct InMemoryRevisionRepository {
    revisions: Mutex<Vec<Revision>>,
}

impl InMemoryRevisionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RevisionRepository for InMemoryRevisionRepository {
    async fn append(&self, revision: &Revision) -> Result<(), DomainError> {
        self.revisions.lock().unwrap().push(revision.clone());
        Ok(())
    }

    async fn list_for_report(&self, report_id: &ReportId) -> Result<Vec<Revision>, DomainError> {
        let mut revisions: Vec<Revision> = self
            .revisions
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.report_id == *report_id)
            .cloned()
            .collect();
        revisions.sort_by(|a, b| b.revised_at.cmp(&a.revised_at));
        Ok(revisions)
    }
}

/// In-memory CommentRepository.
#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: Mutex<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn append(&self, comment: &Comment) -> Result<(), DomainError> {
        self.comments.lock().unwrap().push(comment.clone());
        Ok(())
    }

    async fn list_for_report(
        &self,
        report_id: &ReportId,
        section_key: Option<&str>,
    ) -> Result<Vec<Comment>, DomainError> {
        let comments: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.report_id == *report_id)
            .filter(|c| section_key.map_or(true, |key| c.section_key == key))
            .cloned()
            .collect();
        Ok(comments)
    }
}

/// In-memory ProfileRepository.
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: Mutex<HashMap<UserId, Profile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Profile>, DomainError> {
        Ok(self.profiles.lock().unwrap().get(id).cloned())
    }

    async fn insert(&self, profile: &Profile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.lock().unwrap();
        if profiles.contains_key(&profile.id) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Profile already exists: {}", profile.id),
            ));
        }
        profiles.insert(profile.id.clone(), profile.clone());
        Ok(())
    }
}

/// In-memory ShareGrantRepository.
#[derive(Default)]
pub struct InMemoryShareGrantRepository {
    grants: Mutex<HashMap<String, ShareGrant>>,
}

impl InMemoryShareGrantRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShareGrantRepository for InMemoryShareGrantRepository {
    async fn insert(&self, grant: &ShareGrant) -> Result<(), DomainError> {
        self.grants
            .lock()
            .unwrap()
            .insert(grant.token.clone(), grant.clone());
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<ShareGrant>, DomainError> {
        Ok(self.grants.lock().unwrap().get(token).cloned())
    }
}

/// In-memory ImageStorage returning fake public URLs.
#[derive(Default)]
pub struct InMemoryImageStorage {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryImageStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects (test helper).
    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl ImageStorage for InMemoryImageStorage {
    async fn upload(
        &self,
        path: &str,
        _content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        self.objects.lock().unwrap().insert(path.to_string(), bytes);
        Ok(format!("memory://public/{}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::PriorityLevel;
    use crate::domain::report::WebsiteDetails;
    use chrono::NaiveDate;

    fn sample_report(owner: &str) -> QaReport {
        QaReport::new(
            UserId::new(owner).unwrap(),
            WebsiteDetails {
                website_name: "Example".to_string(),
                url: "https://example.com".to_string(),
                date_reviewed: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
                reviewer_name: "Reviewer".to_string(),
            },
            PriorityLevel::Medium,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn report_repository_round_trip() {
        let repo = InMemoryReportRepository::new();
        let report = sample_report("user-1");
        repo.save(&report).await.unwrap();

        let found = repo.find_by_id(&report.id()).await.unwrap().unwrap();
        assert_eq!(found.id(), report.id());
    }

    #[tokio::test]
    async fn update_missing_report_fails() {
        let repo = InMemoryReportRepository::new();
        let report = sample_report("user-1");
        let err = repo.update(&report).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ReportNotFound);
    }

    #[tokio::test]
    async fn find_by_owner_filters_and_orders() {
        let repo = InMemoryReportRepository::new();
        let mine = sample_report("user-1");
        let other = sample_report("user-2");
        repo.save(&mine).await.unwrap();
        repo.save(&other).await.unwrap();

        let reports = repo.find_by_owner(&UserId::new("user-1").unwrap()).await.unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id(), mine.id());
    }

    #[tokio::test]
    async fn comments_filter_by_section_key() {
        let repo = InMemoryCommentRepository::new();
        let report_id = ReportId::new();
        let user = UserId::new("user-1").unwrap();
        repo.append(&Comment::new(report_id, user.clone(), "sec-a", "first").unwrap())
            .await
            .unwrap();
        repo.append(&Comment::new(report_id, user, "sec-b", "second").unwrap())
            .await
            .unwrap();

        let all = repo.list_for_report(&report_id, None).await.unwrap();
        assert_eq!(all.len(), 2);
        let filtered = repo.list_for_report(&report_id, Some("sec-a")).await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].comment_text, "first");
    }

    #[tokio::test]
    async fn image_storage_returns_public_url() {
        let storage = InMemoryImageStorage::new();
        let url = storage
            .upload("qa-images/r1/sec/a.png", "image/png", vec![1, 2, 3])
            .await
            .unwrap();
        assert_eq!(url, "memory://public/qa-images/r1/sec/a.png");
        assert_eq!(storage.object_count(), 1);
    }
}
