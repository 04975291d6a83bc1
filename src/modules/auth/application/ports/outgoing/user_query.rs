// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::UserId;

/// Persisted account row, including the credential hash.
/// Never serialized directly; handlers expose `UserView` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub date_joined: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserRecord>, UserQueryError>;
    async fn find_by_username(&self, username: &str)
        -> Result<Option<UserRecord>, UserQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, UserQueryError>;
}
