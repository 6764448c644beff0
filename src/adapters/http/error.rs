//! Error responses shared by all HTTP adapters.

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::handlers::report::UploadError;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::report::ReportError;
use crate::ports::StorageError;

/// JSON error body: stable machine code plus a human message.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: HashMap::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }
}

/// Maps a report error to its HTTP response.
pub fn report_error_response(err: ReportError) -> Response {
    let status = match &err {
        ReportError::NotFound(_) => StatusCode::NOT_FOUND,
        ReportError::Forbidden => StatusCode::FORBIDDEN,
        ReportError::AlreadyCompleted => StatusCode::CONFLICT,
        ReportError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        ReportError::ShareGrantNotFound => StatusCode::NOT_FOUND,
        ReportError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "report operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let mut body = ErrorResponse::new(err.code(), err.message());
    if let ReportError::ValidationFailed { field, .. } = &err {
        body.details.insert("field".to_string(), field.clone());
    }
    (status, Json(body)).into_response()
}

/// Maps an upload error to its HTTP response.
pub fn upload_error_response(err: UploadError) -> Response {
    match err {
        UploadError::Report(report_err) => report_error_response(report_err),
        UploadError::TooLarge { .. } => (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(ErrorResponse::new(err.code(), err.message())),
        )
            .into_response(),
        UploadError::Storage(ref storage_err) => {
            tracing::error!(error = %storage_err, "image upload failed");
            let status = match storage_err {
                StorageError::Rejected(_) => StatusCode::BAD_GATEWAY,
                StorageError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            };
            (status, Json(ErrorResponse::new(err.code(), err.message()))).into_response()
        }
    }
}

/// Maps a bare domain error (profile path) to its HTTP response.
pub fn domain_error_response(err: DomainError) -> Response {
    let status = match err.code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::ReportNotFound | ErrorCode::ProfileNotFound | ErrorCode::ShareGrantNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        _ => {
            tracing::error!(error = %err, "request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(ErrorResponse::new(err.code, err.message))).into_response()
}
