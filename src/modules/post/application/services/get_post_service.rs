use async_trait::async_trait;
use uuid::Uuid;

use super::PostViewAssembler;
use crate::auth::application::domain::entities::UserId;
use crate::post::application::{
    domain::entities::PostView,
    ports::{
        incoming::use_cases::{GetPostError, GetPostUseCase},
        outgoing::PostQuery,
    },
};

#[derive(Clone)]
pub struct GetPostService<Q>
where
    Q: PostQuery,
{
    posts: Q,
    assembler: PostViewAssembler,
}

impl<Q> GetPostService<Q>
where
    Q: PostQuery,
{
    pub fn new(posts: Q, assembler: PostViewAssembler) -> Self {
        Self { posts, assembler }
    }
}

#[async_trait]
impl<Q> GetPostUseCase for GetPostService<Q>
where
    Q: PostQuery,
{
    async fn execute(
        &self,
        post_id: Uuid,
        viewer: Option<UserId>,
    ) -> Result<PostView, GetPostError> {
        let record = self
            .posts
            .find_by_id(post_id)
            .await
            .map_err(|e| GetPostError::RepositoryError(e.to_string()))?
            .ok_or(GetPostError::NotFound)?;

        self.assembler
            .assemble_one(record, viewer)
            .await
            .map_err(|e| GetPostError::RepositoryError(e.to_string()))
    }
}
