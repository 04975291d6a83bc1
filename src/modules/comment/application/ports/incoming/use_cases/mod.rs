mod create_comment_use_case;
mod list_comments_use_case;

pub use create_comment_use_case::{
    CreateCommentCommand, CreateCommentCommandError, CreateCommentError, CreateCommentUseCase,
};
pub use list_comments_use_case::{ListCommentsError, ListCommentsUseCase};
