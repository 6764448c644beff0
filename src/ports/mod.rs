//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod comment_repository;
mod image_storage;
mod profile_repository;
mod report_repository;
mod revision_repository;
mod share_grant_repository;
mod token_validator;

pub use comment_repository::CommentRepository;
pub use image_storage::{ImageStorage, StorageError};
pub use profile_repository::ProfileRepository;
pub use report_repository::ReportRepository;
pub use revision_repository::RevisionRepository;
pub use share_grant_repository::{ShareGrant, ShareGrantRepository};
pub use token_validator::TokenValidator;
