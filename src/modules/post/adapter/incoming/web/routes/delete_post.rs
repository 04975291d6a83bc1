use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::post::application::ports::incoming::use_cases::DeletePostError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

/// Delete a post
///
/// Its comments, likes and shares go with it.
#[utoipa::path(
    delete,
    path = "/posts/{post_id}/",
    tag = "posts",
    params(("post_id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Missing or invalid token", body = ApiError),
        (status = 403, description = "Caller is not the author", body = ApiError),
        (status = 404, description = "Post not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError),
    ),
    security(("token_auth" = []))
)]
#[delete("/posts/{post_id}/")]
pub async fn delete_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.delete.execute(user.user_id, post_id).await {
        Ok(()) => {
            info!(user_id = %user.user_id, %post_id, "Post deleted via API");
            ApiResponse::no_content()
        }
        Err(DeletePostError::NotFound) => ApiResponse::not_found("Post not found"),
        Err(e @ DeletePostError::Forbidden) => {
            warn!(user_id = %user.user_id, %post_id, "Post delete by non-author");
            ApiResponse::forbidden(&e.to_string())
        }
        Err(e) => {
            error!(user_id = %user.user_id, %post_id, error = %e, "Failed to delete post");
            ApiResponse::internal_error()
        }
    }
}
