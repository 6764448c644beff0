//! HTTP routes for the public share endpoint.

use axum::{routing::get, Router};

use super::handlers::{get_shared_report, ShareHandlers};

/// Creates the share router. Mounted without the auth middleware.
pub fn share_routes(handlers: ShareHandlers) -> Router {
    Router::new()
        .route("/:token", get(get_shared_report))
        .with_state(handlers)
}
