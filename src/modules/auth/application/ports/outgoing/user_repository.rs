use async_trait::async_trait;

use super::user_query::UserRecord;
use crate::profile::application::ports::outgoing::ProfileRecord;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

/// Everything a fresh registration writes: the user, an empty profile and
/// the first token.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub user: UserRecord,
    pub profile: ProfileRecord,
    pub token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Username already exists")]
    UsernameTaken,

    #[error("Email already exists")]
    EmailTaken,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user, its profile and its token atomically. On error
    /// nothing is stored.
    async fn create_account(&self, data: CreateUserData) -> Result<NewAccount, UserRepositoryError>;
}
