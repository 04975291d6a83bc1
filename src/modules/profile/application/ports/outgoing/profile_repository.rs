use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    pub user_id: UserId,
    pub bio: String,
    pub location: String,
    pub birth_date: Option<NaiveDate>,
    pub avatar: Option<String>,
    pub cover_photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    pub bio: Option<String>,
    pub location: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub avatar: Option<String>,
    pub cover_photo: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Loads the user's profile, creating an empty one on first access.
    async fn get_or_create(&self, user_id: UserId)
        -> Result<ProfileRecord, ProfileRepositoryError>;

    async fn update(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<ProfileRecord, ProfileRepositoryError>;
}
