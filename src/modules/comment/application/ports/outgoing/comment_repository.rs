use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::ports::outgoing::CommentRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCommentData {
    pub post_id: Uuid,
    pub user_id: UserId,
    pub content: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, data: CreateCommentData)
        -> Result<CommentRecord, CommentRepositoryError>;
}
