use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::UserId,
    ports::{
        incoming::use_cases::{LogoutError, LogoutUserUseCase},
        outgoing::TokenRepository,
    },
};

#[derive(Debug, Clone)]
pub struct LogoutUserService<T>
where
    T: TokenRepository,
{
    tokens: T,
}

impl<T> LogoutUserService<T>
where
    T: TokenRepository,
{
    pub fn new(tokens: T) -> Self {
        Self { tokens }
    }
}

#[async_trait]
impl<T> LogoutUserUseCase for LogoutUserService<T>
where
    T: TokenRepository,
{
    async fn execute(&self, user_id: UserId) -> Result<(), LogoutError> {
        let deleted = self
            .tokens
            .delete_for_user(user_id)
            .await
            .map_err(|e| LogoutError::RepositoryError(e.to_string()))?;

        if !deleted {
            return Err(LogoutError::NoActiveToken);
        }

        Ok(())
    }
}
