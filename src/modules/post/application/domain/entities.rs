use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserView;
use crate::comment::application::domain::entities::CommentView;

/// How many posts `GET /posts/recent/` returns.
pub const RECENT_POSTS_LIMIT: u64 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    #[default]
    Text,
    Image,
    Mixed,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Text => "text",
            PostType::Image => "image",
            PostType::Mixed => "mixed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown post type '{0}'")]
pub struct UnknownPostType(pub String);

impl std::str::FromStr for PostType {
    type Err = UnknownPostType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(PostType::Text),
            "image" => Ok(PostType::Image),
            "mixed" => Ok(PostType::Mixed),
            other => Err(UnknownPostType(other.to_string())),
        }
    }
}

/// A post as the feed presents it: the row plus its author, aggregate
/// counts, comments and the viewer's own like/share state.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostView {
    pub id: Uuid,
    pub author: UserView,
    #[schema(example = "hello world")]
    pub content: String,
    pub image: Option<String>,
    pub post_type: PostType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub likes_count: u64,
    pub comments_count: u64,
    pub shares_count: u64,
    pub comments: Vec<CommentView>,
    pub is_liked: bool,
    pub is_shared: bool,
}
