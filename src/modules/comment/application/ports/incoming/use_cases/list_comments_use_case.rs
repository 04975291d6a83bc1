use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::entities::CommentView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCommentsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListCommentsUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid) -> Result<Vec<CommentView>, ListCommentsError>;
}
