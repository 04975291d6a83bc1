use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::PostType;

#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub id: Uuid,
    pub author_id: UserId,
    pub content: String,
    pub image: Option<String>,
    pub post_type: PostType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Which posts to list. Every variant is ordered newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFilter {
    All,
    ByAuthor(UserId),
    Latest(u64),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostQuery: Send + Sync {
    async fn list(&self, filter: PostFilter) -> Result<Vec<PostRecord>, PostQueryError>;

    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<PostRecord>, PostQueryError>;
}
