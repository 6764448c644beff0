//! Foundation module - Shared domain primitives.
//!
//! Value objects, identifiers, enums, and error types that form the
//! vocabulary of the Launchcheck domain.

mod auth;
mod errors;
mod ids;
mod priority_level;
mod rating;
mod report_status;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode};
pub use ids::{CommentId, ReportId, RevisionId, UserId};
pub use priority_level::PriorityLevel;
pub use rating::OverallRating;
pub use report_status::ReportStatus;
pub use timestamp::Timestamp;
