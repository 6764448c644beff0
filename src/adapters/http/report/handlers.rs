//! HTTP handlers for report endpoints.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{
    report_error_response, upload_error_response, ErrorResponse,
};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::report::{
    CompleteReportCommand, CompleteReportHandler, CreateReportCommand, CreateReportHandler,
    CreateShareLinkCommand, CreateShareLinkHandler, ExportReportHandler, ExportReportQuery,
    GetReportHandler, GetReportQuery, ListReportsHandler, ListReportsQuery, ListRevisionsHandler,
    ReviseReportCommand, ReviseReportHandler, SaveChecklistCommand, SaveChecklistHandler,
    SaveMode, UploadImageCommand, UploadImageHandler,
};
use crate::domain::foundation::ReportId;

use super::dto::{
    CompleteReportRequest, CreateReportRequest, ReportListResponse, ReportResponse,
    ReportSummaryResponse, ReviseReportRequest, ReviseReportResponse, RevisionResponse,
    SaveChecklistRequest, ShareLinkResponse, UploadImageResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ReportHandlers {
    pub create: Arc<CreateReportHandler>,
    pub get: Arc<GetReportHandler>,
    pub list: Arc<ListReportsHandler>,
    pub save_checklist: Arc<SaveChecklistHandler>,
    pub complete: Arc<CompleteReportHandler>,
    pub revise: Arc<ReviseReportHandler>,
    pub list_revisions: Arc<ListRevisionsHandler>,
    pub export: Arc<ExportReportHandler>,
    pub share: Arc<CreateShareLinkHandler>,
    pub upload_image: Arc<UploadImageHandler>,
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

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/reports - Start a new report
pub async fn create_report(
    State(handlers): State<ReportHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateReportRequest>,
) -> Response {
    let cmd = CreateReportCommand {
        created_by: user.id,
        website_name: req.website_name,
        url: req.url,
        date_reviewed: req.date_reviewed,
        reviewer_name: req.reviewer_name,
        priority_level: req.priority_level,
    };

    match handlers.create.handle(cmd).await {
        Ok(report) => {
            (StatusCode::CREATED, Json(ReportResponse::from(report))).into_response()
        }
        Err(e) => report_error_response(e),
    }
}

/// GET /api/reports - List the user's reports
pub async fn list_reports(
    State(handlers): State<ReportHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.list.handle(ListReportsQuery { user_id: user.id }).await {
        Ok(reports) => {
            let items: Vec<ReportSummaryResponse> =
                reports.into_iter().map(Into::into).collect();
            let total = items.len();
            (StatusCode::OK, Json(ReportListResponse { items, total })).into_response()
        }
        Err(e) => report_error_response(e),
    }
}

/// GET /api/reports/:id - Fetch one report
pub async fn get_report(
    State(handlers): State<ReportHandlers>,
    RequireAuth(user): RequireAuth,
    Path(report_id): Path<String>,
) -> Response {
    let report_id = match parse_report_id(&report_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetReportQuery {
        report_id,
        user_id: user.id,
    };

    match handlers.get.handle(query).await {
        Ok(report) => (StatusCode::OK, Json(ReportResponse::from(report))).into_response(),
        Err(e) => report_error_response(e),
    }
}

/// PUT /api/reports/:id/checklist - Save the edited checklist
pub async fn save_checklist(
    State(handlers): State<ReportHandlers>,
    RequireAuth(user): RequireAuth,
    Path(report_id): Path<String>,
    Json(req): Json<SaveChecklistRequest>,
) -> Response {
    let report_id = match parse_report_id(&report_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = SaveChecklistCommand {
        report_id,
        user_id: user.id,
        checklist: req.checklist_data,
        mode: if req.immediate {
            SaveMode::Immediate
        } else {
            SaveMode::Debounced
        },
    };

    match handlers.save_checklist.handle(cmd).await {
        Ok(report) => (StatusCode::OK, Json(ReportResponse::from(report))).into_response(),
        Err(e) => report_error_response(e),
    }
}

/// POST /api/reports/:id/complete - Finalize the report
pub async fn complete_report(
    State(handlers): State<ReportHandlers>,
    RequireAuth(user): RequireAuth,
    Path(report_id): Path<String>,
    Json(req): Json<CompleteReportRequest>,
) -> Response {
    let report_id = match parse_report_id(&report_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = CompleteReportCommand {
        report_id,
        user_id: user.id,
        priority_summary: req.priority_summary,
    };

    match handlers.complete.handle(cmd).await {
        Ok(report) => (StatusCode::OK, Json(ReportResponse::from(report))).into_response(),
        Err(e) => report_error_response(e),
    }
}

/// PUT /api/reports/:id/summary - Revise a report after completion
pub async fn revise_report(
    State(handlers): State<ReportHandlers>,
    RequireAuth(user): RequireAuth,
    Path(report_id): Path<String>,
    Json(req): Json<ReviseReportRequest>,
) -> Response {
    let report_id = match parse_report_id(&report_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ReviseReportCommand {
        report_id,
        user_id: user.id,
        priority_summary: req.priority_summary,
        revision_note: req.revision_note,
    };

    match handlers.revise.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(ReviseReportResponse {
                report: result.report.into(),
                revision: result.revision.map(Into::into),
            }),
        )
            .into_response(),
        Err(e) => report_error_response(e),
    }
}

/// GET /api/reports/:id/revisions - Revision history, newest first
pub async fn list_revisions(
    State(handlers): State<ReportHandlers>,
    RequireAuth(user): RequireAuth,
    Path(report_id): Path<String>,
) -> Response {
    let report_id = match parse_report_id(&report_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.list_revisions.handle(report_id, user.id).await {
        Ok(revisions) => {
            let items: Vec<RevisionResponse> = revisions.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => report_error_response(e),
    }
}

/// GET /api/reports/:id/export - Plain-text download
pub async fn export_report(
    State(handlers): State<ReportHandlers>,
    RequireAuth(user): RequireAuth,
    Path(report_id): Path<String>,
) -> Response {
    let report_id = match parse_report_id(&report_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = ExportReportQuery {
        report_id,
        user_id: user.id,
    };

    match handlers.export.handle(query).await {
        Ok(export) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", export.filename),
                ),
            ],
            export.body,
        )
            .into_response(),
        Err(e) => report_error_response(e),
    }
}

/// POST /api/reports/:id/share - Issue a share link
pub async fn share_report(
    State(handlers): State<ReportHandlers>,
    RequireAuth(user): RequireAuth,
    Path(report_id): Path<String>,
) -> Response {
    let report_id = match parse_report_id(&report_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = CreateShareLinkCommand {
        report_id,
        user_id: user.id,
    };

    match handlers.share.handle(cmd).await {
        Ok(link) => (
            StatusCode::CREATED,
            Json(ShareLinkResponse {
                token: link.token,
                report_id: link.report_id.to_string(),
            }),
        )
            .into_response(),
        Err(e) => report_error_response(e),
    }
}

/// POST /api/reports/:id/sections/:section_id/images - Upload a screenshot
pub async fn upload_image(
    State(handlers): State<ReportHandlers>,
    RequireAuth(user): RequireAuth,
    Path((report_id, section_id)): Path<(String, String)>,
    mut multipart: Multipart,
) -> Response {
    let report_id = match parse_report_id(&report_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    // First file field wins; extra fields are ignored.
    let (filename, content_type, bytes) = loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::bad_request("No file in upload")),
                )
                    .into_response()
            }
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::bad_request(format!("Malformed upload: {}", e))),
                )
                    .into_response()
            }
        };

        let filename = match field.file_name() {
            Some(name) => name.to_string(),
            None => continue,
        };
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        match field.bytes().await {
            Ok(bytes) => break (filename, content_type, bytes.to_vec()),
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::bad_request(format!(
                        "Failed to read upload: {}",
                        e
                    ))),
                )
                    .into_response()
            }
        }
    };

    let cmd = UploadImageCommand {
        report_id,
        user_id: user.id,
        section_id,
        filename,
        content_type,
        bytes,
    };

    match handlers.upload_image.handle(cmd).await {
        Ok(uploaded) => (
            StatusCode::CREATED,
            Json(UploadImageResponse { url: uploaded.url }),
        )
            .into_response(),
        Err(e) => upload_error_response(e),
    }
}
