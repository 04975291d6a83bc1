use async_trait::async_trait;
use uuid::Uuid;

use super::{normalize_image, parse_post_type};
use crate::auth::application::domain::entities::UserId;
use crate::post::application::{
    domain::entities::{PostView, UnknownPostType},
    ports::outgoing::PostChanges,
};

/// `Replace` is PUT: content must be supplied. `Partial` is PATCH.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    Replace,
    Partial,
}

#[derive(Debug, Clone)]
pub struct UpdatePostCommand {
    actor: UserId,
    post_id: Uuid,
    changes: PostChanges,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdatePostCommandError {
    #[error("Content is required")]
    EmptyContent,

    #[error("Invalid post_type. Expected one of: text, image, mixed")]
    InvalidPostType(#[from] UnknownPostType),
}

impl UpdatePostCommand {
    pub fn new(
        actor: UserId,
        post_id: Uuid,
        mode: UpdateMode,
        content: Option<String>,
        image: Option<String>,
        post_type: Option<String>,
    ) -> Result<Self, UpdatePostCommandError> {
        if mode == UpdateMode::Replace && content.is_none() {
            return Err(UpdatePostCommandError::EmptyContent);
        }
        if content.as_ref().is_some_and(|c| c.trim().is_empty()) {
            return Err(UpdatePostCommandError::EmptyContent);
        }

        let post_type = parse_post_type(post_type)?;

        Ok(Self {
            actor,
            post_id,
            changes: PostChanges {
                content,
                image: normalize_image(image),
                post_type,
            },
        })
    }

    pub fn actor(&self) -> UserId {
        self.actor
    }

    pub fn post_id(&self) -> Uuid {
        self.post_id
    }

    pub fn changes(&self) -> &PostChanges {
        &self.changes
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePostError {
    #[error("Post not found")]
    NotFound,

    #[error("You do not have permission to perform this action.")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdatePostUseCase: Send + Sync {
    async fn execute(&self, command: UpdatePostCommand) -> Result<PostView, UpdatePostError>;
}
