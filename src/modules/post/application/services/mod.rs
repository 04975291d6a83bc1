mod create_post_service;
mod delete_post_service;
mod get_post_service;
mod list_posts_service;
mod post_view_assembler;
mod update_post_service;

pub use create_post_service::CreatePostService;
pub use delete_post_service::DeletePostService;
pub use get_post_service::GetPostService;
pub use list_posts_service::ListPostsService;
pub use post_view_assembler::{AssembleError, PostViewAssembler};
pub use update_post_service::UpdatePostService;
