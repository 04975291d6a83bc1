mod follow_query;
mod follow_repository;

pub use follow_query::{FollowQuery, FollowQueryError};
pub use follow_repository::{FollowRepository, FollowRepositoryError};
