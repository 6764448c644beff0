//! Report repository port.
//!
//! Contract for persisting and retrieving QaReport aggregates. The store
//! keeps one document per report; checklist and priority summary are
//! embedded, matching the aggregate boundary.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ReportId, UserId};
use crate::domain::report::QaReport;

/// Repository port for QaReport persistence.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Save a new report.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, report: &QaReport) -> Result<(), DomainError>;

    /// Update an existing report (full document replace).
    ///
    /// # Errors
    ///
    /// - `ReportNotFound` if the report doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, report: &QaReport) -> Result<(), DomainError>;

    /// Find a report by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &ReportId) -> Result<Option<QaReport>, DomainError>;

    /// Find all reports owned by a user, newest first.
    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<QaReport>, DomainError>;

    /// Delete a report (primarily for testing).
    ///
    /// # Errors
    ///
    /// - `ReportNotFound` if the report doesn't exist
    async fn delete(&self, id: &ReportId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ReportRepository) {}
    }
}
