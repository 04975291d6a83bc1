use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::Viewer;
use crate::post::application::domain::entities::PostView;
use crate::post::application::ports::incoming::use_cases::GetPostError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

/// Fetch a single post
#[utoipa::path(
    get,
    path = "/posts/{post_id}/",
    tag = "posts",
    params(("post_id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post with counts and comments", body = PostView),
        (status = 404, description = "Post not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError),
    ),
    security((), ("token_auth" = []))
)]
#[get("/posts/{post_id}/")]
pub async fn get_post_handler(
    path: web::Path<Uuid>,
    viewer: Viewer,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.get.execute(post_id, viewer.user_id).await {
        Ok(post) => ApiResponse::success(post),
        Err(GetPostError::NotFound) => ApiResponse::not_found("Post not found"),
        Err(e) => {
            error!(%post_id, error = %e, "Failed to load post");
            ApiResponse::internal_error()
        }
    }
}
