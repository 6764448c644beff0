//! HTTP handlers for profile endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::profile::EnsureProfileHandler;

use super::dto::ProfileResponse;

#[derive(Clone)]
pub struct ProfileHandlers {
    pub ensure: Arc<EnsureProfileHandler>,
}

/// GET /api/profile - Fetch (or lazily create) the caller's profile
pub async fn get_profile(
    State(handlers): State<ProfileHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.ensure.handle(&user).await {
        Ok(profile) => (StatusCode::OK, Json(ProfileResponse::from(profile))).into_response(),
        Err(e) => domain_error_response(e),
    }
}
