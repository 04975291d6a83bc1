use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::follow::application::domain::entities::FollowToggle;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ToggleFollowError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ToggleFollowUseCase: Send + Sync {
    async fn execute(
        &self,
        follower: UserId,
        followee: UserId,
    ) -> Result<FollowToggle, ToggleFollowError>;
}
