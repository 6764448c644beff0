//! Share grant repository port.
//!
//! A share grant maps a server-issued random token to a report. Tokens
//! are opaque capabilities: resolving one requires a stored grant, so a
//! link cannot be derived from a report id.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ReportId, Timestamp, UserId};

/// A stored share grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareGrant {
    pub token: String,
    pub report_id: ReportId,
    pub created_by: UserId,
    pub created_at: Timestamp,
}

/// Repository port for share grants.
#[async_trait]
pub trait ShareGrantRepository: Send + Sync {
    /// Store a new grant.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, grant: &ShareGrant) -> Result<(), DomainError>;

    /// Resolve a token to its grant. Returns `None` for unknown tokens.
    async fn find_by_token(&self, token: &str) -> Result<Option<ShareGrant>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_grant_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ShareGrantRepository) {}
    }
}
