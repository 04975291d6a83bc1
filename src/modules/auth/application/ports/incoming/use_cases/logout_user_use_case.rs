use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("No active token for user")]
    NoActiveToken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait LogoutUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<(), LogoutError>;
}
