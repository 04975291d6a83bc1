use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FollowRepositoryError {
    #[error("Already following")]
    AlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FollowRepository: Send + Sync {
    async fn insert(&self, follower: UserId, followee: UserId)
        -> Result<(), FollowRepositoryError>;

    /// Returns `false` when there was nothing to delete.
    async fn delete(&self, follower: UserId, followee: UserId)
        -> Result<bool, FollowRepositoryError>;
}
