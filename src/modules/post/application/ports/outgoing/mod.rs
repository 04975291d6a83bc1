mod post_query;
mod post_repository;

pub use post_query::{PostFilter, PostQuery, PostQueryError, PostRecord};
pub use post_repository::{CreatePostData, PostChanges, PostRepository, PostRepositoryError};
