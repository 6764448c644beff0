//! UploadImageHandler - Command handler for section screenshot uploads.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::foundation::{ErrorCode, ReportId, UserId};
use crate::domain::report::ReportError;
use crate::ports::{ImageStorage, ReportRepository, StorageError};

/// Uploads above this size are rejected before touching storage.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Command to upload one screenshot for a checklist section.
#[derive(Debug, Clone)]
pub struct UploadImageCommand {
    pub report_id: ReportId,
    pub user_id: UserId,
    pub section_id: String,
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// The stored image's public URL.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub url: String,
}

/// Errors raised by image uploads.
#[derive(Debug, Clone)]
pub enum UploadError {
    /// Payload exceeded the upload limit.
    TooLarge { size: usize },
    /// Report lookup or ownership failed.
    Report(ReportError),
    /// Object storage refused or was unreachable.
    Storage(StorageError),
}

impl UploadError {
    pub fn code(&self) -> ErrorCode {
        match self {
            UploadError::TooLarge { .. } => ErrorCode::UploadTooLarge,
            UploadError::Report(err) => err.code(),
            UploadError::Storage(StorageError::Rejected(_)) => ErrorCode::UploadRejected,
            UploadError::Storage(StorageError::Unavailable(_)) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            UploadError::TooLarge { size } => format!(
                "Upload of {} bytes exceeds the {} byte limit",
                size, MAX_UPLOAD_BYTES
            ),
            UploadError::Report(err) => err.message(),
            UploadError::Storage(err) => err.to_string(),
        }
    }
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for UploadError {}

impl From<ReportError> for UploadError {
    fn from(err: ReportError) -> Self {
        UploadError::Report(err)
    }
}

impl From<StorageError> for UploadError {
    fn from(err: StorageError) -> Self {
        UploadError::Storage(err)
    }
}

/// Handler for image uploads.
pub struct UploadImageHandler {
    repository: Arc<dyn ReportRepository>,
    storage: Arc<dyn ImageStorage>,
}

impl UploadImageHandler {
    pub fn new(repository: Arc<dyn ReportRepository>, storage: Arc<dyn ImageStorage>) -> Self {
        Self { repository, storage }
    }

    pub async fn handle(&self, cmd: UploadImageCommand) -> Result<UploadedImage, UploadError> {
        if cmd.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge {
                size: cmd.bytes.len(),
            });
        }

        let report = self
            .repository
            .find_by_id(&cmd.report_id)
            .await
            .map_err(ReportError::from)?
            .ok_or(ReportError::NotFound(cmd.report_id))?;

        if !report.is_owned_by(&cmd.user_id) {
            return Err(ReportError::Forbidden.into());
        }

        // Random prefix keeps concurrent uploads of the same filename from
        // clobbering each other.
        let path = format!(
            "{}/{}/{}-{}",
            report.id(),
            cmd.section_id,
            Uuid::new_v4().simple(),
            sanitize_filename(&cmd.filename),
        );

        let url = self
            .storage
            .upload(&path, &cmd.content_type, cmd.bytes)
            .await?;

        tracing::debug!(report_id = %report.id(), section = %cmd.section_id, "uploaded image");
        Ok(UploadedImage { url })
    }
}

/// Keeps the stored object key flat and free of path tricks.
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.trim_matches('_').is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}
