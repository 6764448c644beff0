//! User profile - local record mirroring the identity provider.
//!
//! Lazily created on first authenticated access; the provider remains the
//! source of truth for identity, this record just gives reports something
//! local to reference.

use crate::domain::foundation::{AuthenticatedUser, Timestamp, UserId};

/// Local profile record for an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: UserId,
    pub email: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Timestamp,
}

impl Profile {
    /// Builds a profile from the claims of an authenticated user.
    pub fn from_authenticated(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            full_name: user.display_name.clone(),
            avatar_url: user.avatar_url.clone(),
            created_at: Timestamp::now(),
        }
    }
}
