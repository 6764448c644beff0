//! Image storage port.
//!
//! Screenshots are stored as opaque blobs in an external object store;
//! the only thing kept in the report is the publicly resolvable URL the
//! upload returns.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during object storage operations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The store rejected the write (bad path, permissions, quota).
    #[error("Upload rejected: {0}")]
    Rejected(String),

    /// The store could not be reached.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Object storage for uploaded screenshots.
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Upload a blob under `path` and return its public URL.
    ///
    /// Paths are slash-separated, scoped by report and section
    /// (e.g. `{report_id}/{section_id}/{filename}`); the bucket is the
    /// adapter's concern.
    ///
    /// # Errors
    ///
    /// - `Rejected` if the store refuses the write
    /// - `Unavailable` on transport failure
    async fn upload(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError>;
}
