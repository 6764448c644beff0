//! Token validator port.
//!
//! Primary authentication port: the HTTP middleware hands every Bearer
//! token to an implementation of this trait. Keeping it a port means the
//! middleware doesn't care whether tokens come from a real OIDC provider
//! or a test mock.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates bearer tokens and extracts the authenticated principal.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Validate a token and return the user it authenticates.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` / `TokenExpired` for bad tokens
    /// - `ServiceUnavailable` when validation infrastructure is down
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_validator_is_object_safe() {
        fn _accepts_dyn(_validator: &dyn TokenValidator) {}
    }
}
