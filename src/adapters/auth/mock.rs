//! Mock token validator for tests.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::TokenValidator;

/// Mock validator mapping fixed tokens to users.
///
/// Unknown tokens are rejected as invalid; `failing()` simulates a
/// provider outage.
#[derive(Default)]
pub struct MockTokenValidator {
    users: HashMap<String, AuthenticatedUser>,
    fail: bool,
}

impl MockTokenValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.users.insert(token.into(), user);
        self
    }

    pub fn failing() -> Self {
        Self {
            users: HashMap::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl TokenValidator for MockTokenValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if self.fail {
            return Err(AuthError::service_unavailable("mock outage"));
        }
        self.users
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
