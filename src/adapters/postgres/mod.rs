//! PostgreSQL adapter implementations of the repository ports.

mod comment_repository;
mod profile_repository;
mod report_repository;
mod revision_repository;
mod share_grant_repository;

pub use comment_repository::PostgresCommentRepository;
pub use profile_repository::PostgresProfileRepository;
pub use report_repository::PostgresReportRepository;
pub use revision_repository::PostgresRevisionRepository;
pub use share_grant_repository::PostgresShareGrantRepository;
