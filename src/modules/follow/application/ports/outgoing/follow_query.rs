use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FollowQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FollowQuery: Send + Sync {
    async fn exists(&self, follower: UserId, followee: UserId) -> Result<bool, FollowQueryError>;

    async fn count_followers(&self, user_id: UserId) -> Result<u64, FollowQueryError>;
}
