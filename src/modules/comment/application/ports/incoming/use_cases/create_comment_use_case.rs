use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::domain::entities::CommentView;

/// Author and post come from the request context, never from the body.
#[derive(Debug, Clone)]
pub struct CreateCommentCommand {
    author: UserId,
    post_id: Uuid,
    content: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateCommentCommandError {
    #[error("Content is required")]
    EmptyContent,
}

impl CreateCommentCommand {
    pub fn new(
        author: UserId,
        post_id: Uuid,
        content: Option<String>,
    ) -> Result<Self, CreateCommentCommandError> {
        let content = content
            .filter(|c| !c.trim().is_empty())
            .ok_or(CreateCommentCommandError::EmptyContent)?;

        Ok(Self {
            author,
            post_id,
            content,
        })
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn post_id(&self) -> Uuid {
        self.post_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCommentError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCommentUseCase: Send + Sync {
    async fn execute(&self, command: CreateCommentCommand)
        -> Result<CommentView, CreateCommentError>;
}
