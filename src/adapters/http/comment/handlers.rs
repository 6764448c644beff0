//! HTTP handlers for comment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{report_error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::comment::{
    AddCommentCommand, AddCommentHandler, ListCommentsHandler, ListCommentsQuery,
};
use crate::domain::foundation::ReportId;

use super::dto::{AddCommentRequest, CommentResponse, ListCommentsParams};

#[derive(Clone)]
pub struct CommentHandlers {
    pub add: Arc<AddCommentHandler>,
    pub list: Arc<ListCommentsHandler>,
}

fn parse_report_id(raw: &str) -> Result<ReportId, Response> {
    raw.parse::<ReportId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid report ID")),
        )
            .into_response()
    })
}

/// POST /api/reports/:id/comments - Post a section comment
pub async fn add_comment(
    State(handlers): State<CommentHandlers>,
    RequireAuth(user): RequireAuth,
    Path(report_id): Path<String>,
    Json(req): Json<AddCommentRequest>,
) -> Response {
    let report_id = match parse_report_id(&report_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = AddCommentCommand {
        report_id,
        user_id: user.id,
        section_key: req.section_key,
        comment_text: req.comment_text,
    };

    match handlers.add.handle(cmd).await {
        Ok(comment) => {
            (StatusCode::CREATED, Json(CommentResponse::from(comment))).into_response()
        }
        Err(e) => report_error_response(e),
    }
}

/// GET /api/reports/:id/comments - List comments, oldest first
pub async fn list_comments(
    State(handlers): State<CommentHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(report_id): Path<String>,
    Query(params): Query<ListCommentsParams>,
) -> Response {
    let report_id = match parse_report_id(&report_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = ListCommentsQuery {
        report_id,
        section_key: params.section_key,
    };

    match handlers.list.handle(query).await {
        Ok(comments) => {
            let items: Vec<CommentResponse> = comments.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => report_error_response(e),
    }
}
