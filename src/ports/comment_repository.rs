//! Comment repository port (append-only).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ReportId};
use crate::domain::report::Comment;

/// Repository port for section comments.
///
/// Append-only: comments are never edited or deleted.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Append a comment.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn append(&self, comment: &Comment) -> Result<(), DomainError>;

    /// List comments for a report, oldest first.
    ///
    /// With `section_key`, restricts to one checklist section.
    async fn list_for_report(
        &self,
        report_id: &ReportId,
        section_key: Option<&str>,
    ) -> Result<Vec<Comment>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CommentRepository) {}
    }
}
