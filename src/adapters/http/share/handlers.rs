//! HTTP handlers for the public share endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::report_error_response;
use crate::adapters::http::report::dto::ReportResponse;
use crate::application::handlers::report::ResolveSharedReportHandler;

#[derive(Clone)]
pub struct ShareHandlers {
    pub resolve: Arc<ResolveSharedReportHandler>,
}

/// GET /api/share/:token - Resolve a share link (no auth)
pub async fn get_shared_report(
    State(handlers): State<ShareHandlers>,
    Path(token): Path<String>,
) -> Response {
    match handlers.resolve.handle(&token).await {
        Ok(report) => (StatusCode::OK, Json(ReportResponse::from(report))).into_response(),
        Err(e) => report_error_response(e),
    }
}
