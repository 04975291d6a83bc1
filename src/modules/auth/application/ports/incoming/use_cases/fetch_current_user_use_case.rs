use async_trait::async_trait;

use crate::auth::application::domain::entities::{CurrentUser, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchCurrentUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait FetchCurrentUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<CurrentUser, FetchCurrentUserError>;
}
