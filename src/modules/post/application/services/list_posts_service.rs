use async_trait::async_trait;

use super::PostViewAssembler;
use crate::auth::application::domain::entities::UserId;
use crate::post::application::{
    domain::entities::PostView,
    ports::{
        incoming::use_cases::{ListPostsError, ListPostsUseCase},
        outgoing::{PostFilter, PostQuery},
    },
};

#[derive(Clone)]
pub struct ListPostsService<Q>
where
    Q: PostQuery,
{
    posts: Q,
    assembler: PostViewAssembler,
}

impl<Q> ListPostsService<Q>
where
    Q: PostQuery,
{
    pub fn new(posts: Q, assembler: PostViewAssembler) -> Self {
        Self { posts, assembler }
    }
}

#[async_trait]
impl<Q> ListPostsUseCase for ListPostsService<Q>
where
    Q: PostQuery,
{
    async fn execute(
        &self,
        filter: PostFilter,
        viewer: Option<UserId>,
    ) -> Result<Vec<PostView>, ListPostsError> {
        let records = self
            .posts
            .list(filter)
            .await
            .map_err(|e| ListPostsError::RepositoryError(e.to_string()))?;

        self.assembler
            .assemble(records, viewer)
            .await
            .map_err(|e| ListPostsError::RepositoryError(e.to_string()))
    }
}
