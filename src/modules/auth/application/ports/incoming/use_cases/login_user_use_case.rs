use async_trait::async_trait;

use crate::auth::application::domain::entities::AuthSession;

#[derive(Debug, Clone)]
pub struct LoginCommand {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginCommandError {
    #[error("Username and password are required")]
    MissingCredentials,
}

impl LoginCommand {
    pub fn new(
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self, LoginCommandError> {
        let username = username
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or(LoginCommandError::MissingCredentials)?;
        let password = password
            .filter(|p| !p.is_empty())
            .ok_or(LoginCommandError::MissingCredentials)?;

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<AuthSession, LoginError>;
}
