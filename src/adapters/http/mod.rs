//! HTTP adapters - REST API implementations.
//!
//! Each aggregate has its own HTTP adapter (dto, handlers, routes); the
//! share endpoint lives apart because it is the one unauthenticated
//! surface.

pub mod comment;
pub mod error;
pub mod middleware;
pub mod profile;
pub mod report;
pub mod share;

pub use comment::{comment_routes, CommentHandlers};
pub use profile::{profile_routes, ProfileHandlers};
pub use report::{report_routes, ReportHandlers};
pub use share::{share_routes, ShareHandlers};
