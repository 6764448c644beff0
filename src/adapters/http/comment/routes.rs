//! HTTP routes for comment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{add_comment, list_comments, CommentHandlers};

/// Creates the comment router, nested under /api/reports.
pub fn comment_routes(handlers: CommentHandlers) -> Router {
    Router::new()
        .route("/:id/comments", post(add_comment))
        .route("/:id/comments", get(list_comments))
        .with_state(handlers)
}
