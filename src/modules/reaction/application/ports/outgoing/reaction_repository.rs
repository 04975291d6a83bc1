use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::reaction::application::domain::entities::ReactionKind;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReactionRepositoryError {
    /// The (user, post) pair is already present; a concurrent request won.
    #[error("Reaction already exists")]
    AlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    async fn insert(
        &self,
        kind: ReactionKind,
        user_id: UserId,
        post_id: Uuid,
    ) -> Result<(), ReactionRepositoryError>;

    /// Returns `false` when there was nothing to delete.
    async fn delete(
        &self,
        kind: ReactionKind,
        user_id: UserId,
        post_id: Uuid,
    ) -> Result<bool, ReactionRepositoryError>;
}
