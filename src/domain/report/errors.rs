//! Report-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ReportId};

/// Errors raised by report operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Report was not found.
    NotFound(ReportId),
    /// User does not own the report.
    Forbidden,
    /// Report is already completed; the transition cannot repeat.
    AlreadyCompleted,
    /// A field failed validation on create/update.
    ValidationFailed { field: String, message: String },
    /// Share link could not be resolved.
    ShareGrantNotFound,
    /// Infrastructure failure (database, storage).
    Infrastructure(String),
}

impl ReportError {
    pub fn not_found(id: ReportId) -> Self {
        ReportError::NotFound(id)
    }

    pub fn forbidden() -> Self {
        ReportError::Forbidden
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ReportError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ReportError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ReportError::NotFound(_) => ErrorCode::ReportNotFound,
            ReportError::Forbidden => ErrorCode::Forbidden,
            ReportError::AlreadyCompleted => ErrorCode::ReportAlreadyCompleted,
            ReportError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ReportError::ShareGrantNotFound => ErrorCode::ShareGrantNotFound,
            ReportError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ReportError::NotFound(id) => format!("Report not found: {}", id),
            ReportError::Forbidden => "Permission denied".to_string(),
            ReportError::AlreadyCompleted => {
                "Report is already completed".to_string()
            }
            ReportError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ReportError::ShareGrantNotFound => {
                "Share link not found or revoked".to_string()
            }
            ReportError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ReportError {}

impl From<DomainError> for ReportError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => ReportError::Forbidden,
            ErrorCode::ReportAlreadyCompleted => ReportError::AlreadyCompleted,
            ErrorCode::ShareGrantNotFound => ReportError::ShareGrantNotFound,
            ErrorCode::ValidationFailed => ReportError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ReportError::Infrastructure(err.to_string()),
        }
    }
}
