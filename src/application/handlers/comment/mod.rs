//! Comment handlers - append-only section discussion.

mod add_comment;
mod list_comments;

pub use add_comment::{AddCommentCommand, AddCommentHandler};
pub use list_comments::{ListCommentsHandler, ListCommentsQuery};
