use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::ports::{
    incoming::use_cases::{DeletePostError, DeletePostUseCase},
    outgoing::{PostQuery, PostRepository, PostRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeletePostService<Q, R>
where
    Q: PostQuery,
    R: PostRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeletePostService<Q, R>
where
    Q: PostQuery,
    R: PostRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeletePostUseCase for DeletePostService<Q, R>
where
    Q: PostQuery,
    R: PostRepository,
{
    async fn execute(&self, actor: UserId, post_id: Uuid) -> Result<(), DeletePostError> {
        let existing = self
            .query
            .find_by_id(post_id)
            .await
            .map_err(|e| DeletePostError::RepositoryError(e.to_string()))?
            .ok_or(DeletePostError::NotFound)?;

        if existing.author_id != actor {
            return Err(DeletePostError::Forbidden);
        }

        self.repository
            .delete(post_id)
            .await
            .map_err(|e| match e {
                PostRepositoryError::NotFound => DeletePostError::NotFound,
                other => DeletePostError::RepositoryError(other.to_string()),
            })?;

        info!(%post_id, %actor, "Post deleted");
        Ok(())
    }
}
