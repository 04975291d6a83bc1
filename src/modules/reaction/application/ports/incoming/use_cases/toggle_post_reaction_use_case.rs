use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::reaction::application::domain::entities::{ReactionKind, ReactionToggle};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TogglePostReactionError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait TogglePostReactionUseCase: Send + Sync {
    async fn execute(
        &self,
        kind: ReactionKind,
        actor: UserId,
        post_id: Uuid,
    ) -> Result<ReactionToggle, TogglePostReactionError>;
}
