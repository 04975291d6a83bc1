mod create_comment_service;
mod list_comments_service;

pub use create_comment_service::CreateCommentService;
pub use list_comments_service::{comment_views, ListCommentsService};
