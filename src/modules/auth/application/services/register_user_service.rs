use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::{
    domain::entities::{AuthSession, UserView},
    ports::{
        incoming::use_cases::{RegisterUserCommand, RegisterUserError, RegisterUserUseCase},
        outgoing::{CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError},
    },
};
use crate::profile::application::domain::entities::ProfileView;

/// Creates the account, its empty profile and its first token.
#[derive(Clone)]
pub struct RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, command: RegisterUserCommand) -> Result<AuthSession, RegisterUserError> {
        if self
            .query
            .find_by_username(command.username())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?
            .is_some()
        {
            return Err(RegisterUserError::UsernameTaken);
        }

        if self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?
            .is_some()
        {
            return Err(RegisterUserError::EmailTaken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let data = CreateUserData {
            username: command.username().to_string(),
            email: command.email().to_string(),
            password_hash,
            first_name: command.first_name().to_string(),
            last_name: command.last_name().to_string(),
        };

        // The checks above are advisory; the unique indexes decide.
        let account = self
            .repository
            .create_account(data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UsernameTaken => RegisterUserError::UsernameTaken,
                UserRepositoryError::EmailTaken => RegisterUserError::EmailTaken,
                UserRepositoryError::UserAlreadyExists => RegisterUserError::CreationFailed,
                UserRepositoryError::DatabaseError(msg) => RegisterUserError::RepositoryError(msg),
            })?;

        info!(user_id = %account.user.id, username = %account.user.username, "User registered");

        let user_view = UserView::from(&account.user);
        Ok(AuthSession {
            token: account.token,
            profile: ProfileView::new(account.profile, user_view.clone()),
            user: user_view,
        })
    }
}
