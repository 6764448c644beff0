//! Profile repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::Profile;

/// Repository port for user profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find a profile by user ID. Returns `None` if absent.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Profile>, DomainError>;

    /// Insert a new profile.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (including duplicates)
    async fn insert(&self, profile: &Profile) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ProfileRepository) {}
    }
}
