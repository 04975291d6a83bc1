use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::{domain::entities::PostView, ports::outgoing::PostFilter};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPostsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListPostsUseCase: Send + Sync {
    /// `viewer` only affects the `is_liked` / `is_shared` flags.
    async fn execute(
        &self,
        filter: PostFilter,
        viewer: Option<UserId>,
    ) -> Result<Vec<PostView>, ListPostsError>;
}
