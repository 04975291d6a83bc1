use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{AuthSession, UserView},
    ports::{
        incoming::use_cases::{LoginCommand, LoginError, LoginUserUseCase},
        outgoing::{PasswordHasher, TokenRepository, UserQuery},
    },
};
use crate::profile::application::{
    domain::entities::ProfileView, ports::outgoing::ProfileRepository,
};

#[derive(Clone)]
pub struct LoginUserService<Q, P, T>
where
    Q: UserQuery,
    P: ProfileRepository,
    T: TokenRepository,
{
    query: Q,
    profiles: P,
    tokens: T,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, P, T> LoginUserService<Q, P, T>
where
    Q: UserQuery,
    P: ProfileRepository,
    T: TokenRepository,
{
    pub fn new(query: Q, profiles: P, tokens: T, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            profiles,
            tokens,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, P, T> LoginUserUseCase for LoginUserService<Q, P, T>
where
    Q: UserQuery,
    P: ProfileRepository,
    T: TokenRepository,
{
    async fn execute(&self, command: LoginCommand) -> Result<AuthSession, LoginError> {
        let user = self
            .query
            .find_by_username(command.username())
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        // An existing key is handed back unchanged.
        let token = self
            .tokens
            .get_or_create(user.id)
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        let profile = self
            .profiles
            .get_or_create(user.id)
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        let user_view = UserView::from(&user);
        Ok(AuthSession {
            token,
            profile: ProfileView::new(profile, user_view.clone()),
            user: user_view,
        })
    }
}
