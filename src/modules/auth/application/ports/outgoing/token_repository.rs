use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Opaque bearer tokens, at most one per user.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Returns the user's existing key, or issues a new one. Keys are never rotated.
    async fn get_or_create(&self, user_id: UserId) -> Result<String, TokenRepositoryError>;

    async fn find_user_by_key(&self, key: &str) -> Result<Option<UserId>, TokenRepositoryError>;

    /// Returns `false` when the user had no token to delete.
    async fn delete_for_user(&self, user_id: UserId) -> Result<bool, TokenRepositoryError>;
}
