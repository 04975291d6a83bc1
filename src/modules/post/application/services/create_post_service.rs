use async_trait::async_trait;
use tracing::info;

use super::PostViewAssembler;
use crate::post::application::{
    domain::entities::PostView,
    ports::{
        incoming::use_cases::{CreatePostCommand, CreatePostError, CreatePostUseCase},
        outgoing::{CreatePostData, PostRepository},
    },
};

#[derive(Clone)]
pub struct CreatePostService<R>
where
    R: PostRepository,
{
    repository: R,
    assembler: PostViewAssembler,
}

impl<R> CreatePostService<R>
where
    R: PostRepository,
{
    pub fn new(repository: R, assembler: PostViewAssembler) -> Self {
        Self {
            repository,
            assembler,
        }
    }
}

#[async_trait]
impl<R> CreatePostUseCase for CreatePostService<R>
where
    R: PostRepository,
{
    async fn execute(&self, command: CreatePostCommand) -> Result<PostView, CreatePostError> {
        let author = command.author();
        let data = CreatePostData {
            author_id: author,
            content: command.content().to_string(),
            image: command.image().map(str::to_string),
            post_type: command.post_type(),
        };

        let record = self
            .repository
            .create(data)
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))?;

        info!(post_id = %record.id, author = %author, "Post created");

        self.assembler
            .assemble_one(record, Some(author))
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))
    }
}
