use async_trait::async_trait;
use email_address::EmailAddress;

use crate::auth::application::domain::entities::AuthSession;

pub const MAX_USERNAME_LENGTH: usize = 150;

//
// ──────────────────────────────────────────────────────────
// Register User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    username: String,
    email: String,
    password: String,
    first_name: String,
    last_name: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error("Username, email, and password are required")]
    MissingRequiredFields,

    #[error("Username must be at most 150 characters")]
    UsernameTooLong,

    #[error("Invalid email format")]
    InvalidEmail,
}

impl RegisterUserCommand {
    pub fn new(
        username: Option<String>,
        email: Option<String>,
        password: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<Self, RegisterUserCommandError> {
        let username = required(username)?;
        let email = required(email)?;
        let password = password
            .filter(|p| !p.trim().is_empty())
            .ok_or(RegisterUserCommandError::MissingRequiredFields)?;

        if username.chars().count() > MAX_USERNAME_LENGTH {
            return Err(RegisterUserCommandError::UsernameTooLong);
        }

        if !EmailAddress::is_valid(&email) {
            return Err(RegisterUserCommandError::InvalidEmail);
        }

        Ok(Self {
            username,
            email: normalize_email(&email),
            password,
            first_name: first_name.map(|n| n.trim().to_string()).unwrap_or_default(),
            last_name: last_name.map(|n| n.trim().to_string()).unwrap_or_default(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

/// Lowercases the domain only; the local part is case-sensitive.
fn normalize_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}

fn required(value: Option<String>) -> Result<String, RegisterUserCommandError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(RegisterUserCommandError::MissingRequiredFields)
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Username already exists")]
    UsernameTaken,

    #[error("Email already exists")]
    EmailTaken,

    #[error("Failed to create user")]
    CreationFailed,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand)
        -> Result<AuthSession, RegisterUserError>;
}
