use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::ProfileView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<ProfileView, GetProfileError>;
}
