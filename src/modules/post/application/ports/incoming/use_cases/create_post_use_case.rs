use async_trait::async_trait;

use super::{normalize_image, parse_post_type};
use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::{PostType, PostView, UnknownPostType};

#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    author: UserId,
    content: String,
    image: Option<String>,
    post_type: PostType,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreatePostCommandError {
    #[error("Content is required")]
    EmptyContent,

    #[error("Invalid post_type. Expected one of: text, image, mixed")]
    InvalidPostType(#[from] UnknownPostType),
}

impl CreatePostCommand {
    pub fn new(
        author: UserId,
        content: Option<String>,
        image: Option<String>,
        post_type: Option<String>,
    ) -> Result<Self, CreatePostCommandError> {
        let content = content
            .filter(|c| !c.trim().is_empty())
            .ok_or(CreatePostCommandError::EmptyContent)?;

        let post_type = parse_post_type(post_type)?.unwrap_or_default();

        Ok(Self {
            author,
            content,
            image: normalize_image(image),
            post_type,
        })
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn post_type(&self) -> PostType {
        self.post_type
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePostError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePostUseCase: Send + Sync {
    async fn execute(&self, command: CreatePostCommand) -> Result<PostView, CreatePostError>;
}
