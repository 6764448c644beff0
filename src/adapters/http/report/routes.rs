//! HTTP routes for report endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    complete_report, create_report, export_report, get_report, list_reports, list_revisions,
    revise_report, save_checklist, share_report, upload_image, ReportHandlers,
};

/// Multipart envelope allowance on top of the 5 MiB payload limit.
const UPLOAD_BODY_LIMIT: usize = 6 * 1024 * 1024;

/// Creates the report router with all endpoints.
pub fn report_routes(handlers: ReportHandlers) -> Router {
    Router::new()
        .route("/", post(create_report))
        .route("/", get(list_reports))
        .route("/:id", get(get_report))
        .route("/:id/checklist", put(save_checklist))
        .route("/:id/complete", post(complete_report))
        .route("/:id/summary", put(revise_report))
        .route("/:id/revisions", get(list_revisions))
        .route("/:id/export", get(export_report))
        .route("/:id/share", post(share_report))
        .route(
            "/:id/sections/:section_id/images",
            post(upload_image).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .with_state(handlers)
}
