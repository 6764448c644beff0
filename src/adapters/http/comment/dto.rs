//! HTTP DTOs for comment endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::report::Comment;

/// Request to post a comment on a checklist section.
#[derive(Debug, Clone, Deserialize)]
pub struct AddCommentRequest {
    pub section_key: String,
    pub comment_text: String,
}

/// Query parameters for listing comments.
#[derive(Debug, Clone, Deserialize)]
pub struct ListCommentsParams {
    #[serde(default)]
    pub section_key: Option<String>,
}

/// One comment in a section thread.
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub report_id: String,
    pub user_id: String,
    pub section_key: String,
    pub comment_text: String,
    pub created_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            report_id: comment.report_id.to_string(),
            user_id: comment.user_id.to_string(),
            section_key: comment.section_key,
            comment_text: comment.comment_text,
            created_at: comment.created_at.to_rfc3339(),
        }
    }
}
