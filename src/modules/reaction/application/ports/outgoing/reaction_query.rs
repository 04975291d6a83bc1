use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::reaction::application::domain::entities::ReactionKind;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReactionQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReactionQuery: Send + Sync {
    async fn exists(
        &self,
        kind: ReactionKind,
        user_id: UserId,
        post_id: Uuid,
    ) -> Result<bool, ReactionQueryError>;

    async fn count(&self, kind: ReactionKind, post_id: Uuid) -> Result<u64, ReactionQueryError>;
}
