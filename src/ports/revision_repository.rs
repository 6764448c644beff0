//! Revision repository port (append-only).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ReportId};
use crate::domain::report::Revision;

/// Repository port for revision audit records.
///
/// Append-only: there is deliberately no update or delete.
#[async_trait]
pub trait RevisionRepository: Send + Sync {
    /// Append a revision record.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn append(&self, revision: &Revision) -> Result<(), DomainError>;

    /// List all revisions of a report, newest first.
    async fn list_for_report(&self, report_id: &ReportId) -> Result<Vec<Revision>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revision_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn RevisionRepository) {}
    }
}
