use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::PostType;
use crate::post::application::ports::outgoing::PostRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePostData {
    pub author_id: UserId,
    pub content: String,
    pub image: Option<String>,
    pub post_type: PostType,
}

/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostChanges {
    pub content: Option<String>,
    pub image: Option<String>,
    pub post_type: Option<PostType>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Post not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, data: CreatePostData) -> Result<PostRecord, PostRepositoryError>;

    async fn update(
        &self,
        post_id: Uuid,
        changes: PostChanges,
    ) -> Result<PostRecord, PostRepositoryError>;

    /// Likes, shares and comments go with the post through FK cascade.
    async fn delete(&self, post_id: Uuid) -> Result<(), PostRepositoryError>;
}
