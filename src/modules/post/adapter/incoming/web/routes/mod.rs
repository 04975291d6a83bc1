mod create_post;
mod delete_post;
mod get_post;
mod list_posts;
mod update_post;

pub use create_post::*;
pub use delete_post::*;
pub use get_post::*;
pub use list_posts::*;
pub use update_post::*;
