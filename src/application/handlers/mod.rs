//! Command and query handlers grouped by aggregate.

pub mod comment;
pub mod profile;
pub mod report;
