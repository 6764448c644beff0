//! Section comments - append-only discussion on a checklist section.

use crate::domain::foundation::{CommentId, ReportId, Timestamp, UserId};

/// A comment attached to one checklist section of a report.
///
/// `section_key` is the opaque section identifier from the checklist
/// (e.g. `func-forms`). Comments are append-only; no edit or delete.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub report_id: ReportId,
    pub user_id: UserId,
    pub section_key: String,
    pub comment_text: String,
    pub created_at: Timestamp,
}

impl Comment {
    /// Creates a comment, rejecting blank text.
    pub fn new(
        report_id: ReportId,
        user_id: UserId,
        section_key: impl Into<String>,
        comment_text: impl Into<String>,
    ) -> Result<Self, EmptyComment> {
        let comment_text = comment_text.into();
        if comment_text.trim().is_empty() {
            return Err(EmptyComment);
        }
        Ok(Self {
            id: CommentId::new(),
            report_id,
            user_id,
            section_key: section_key.into(),
            comment_text,
            created_at: Timestamp::now(),
        })
    }
}

/// Error returned when a comment has no text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyComment;

impl std::fmt::Display for EmptyComment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "comment text cannot be empty")
    }
}

impl std::error::Error for EmptyComment {}
