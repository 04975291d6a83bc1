mod create_post_use_case;
mod delete_post_use_case;
mod get_post_use_case;
mod list_posts_use_case;
mod update_post_use_case;

pub use create_post_use_case::{
    CreatePostCommand, CreatePostCommandError, CreatePostError, CreatePostUseCase,
};
pub use delete_post_use_case::{DeletePostError, DeletePostUseCase};
pub use get_post_use_case::{GetPostError, GetPostUseCase};
pub use list_posts_use_case::{ListPostsError, ListPostsUseCase};
pub use update_post_use_case::{
    UpdatePostCommand, UpdatePostCommandError, UpdatePostError, UpdatePostUseCase, UpdateMode,
};

use crate::post::application::domain::entities::{PostType, UnknownPostType};

/// Shared validation for post bodies coming from create and update requests.
fn parse_post_type(raw: Option<String>) -> Result<Option<PostType>, UnknownPostType> {
    match raw {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some),
    }
}

fn normalize_image(image: Option<String>) -> Option<String> {
    image.map(|i| i.trim().to_string()).filter(|i| !i.is_empty())
}
