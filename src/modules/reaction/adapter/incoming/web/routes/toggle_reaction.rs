use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::reaction::application::domain::entities::{
    LikeResponse, ReactionKind, ReactionToggle, ShareResponse,
};
use crate::reaction::application::ports::incoming::use_cases::TogglePostReactionError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

async fn toggle(
    data: &AppState,
    kind: ReactionKind,
    user: AuthenticatedUser,
    post_id: Uuid,
) -> Result<ReactionToggle, HttpResponse> {
    data.toggle_reaction_use_case
        .execute(kind, user.user_id, post_id)
        .await
        .map_err(|e| match e {
            TogglePostReactionError::PostNotFound => ApiResponse::not_found("Post not found"),
            other => {
                error!(%kind, user_id = %user.user_id, %post_id, error = %other, "Toggle failed");
                ApiResponse::internal_error()
            }
        })
}

/// Like or unlike a post
///
/// Calling it twice returns the post to its original state.
#[utoipa::path(
    post,
    path = "/posts/{post_id}/like/",
    tag = "reactions",
    params(("post_id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "New like state and total", body = LikeResponse),
        (status = 401, description = "Missing or invalid token", body = ApiError),
        (status = 404, description = "Post not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError),
    ),
    security(("token_auth" = []))
)]
#[post("/posts/{post_id}/like/")]
pub async fn like_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match toggle(&data, ReactionKind::Like, user, path.into_inner()).await {
        Ok(state) => ApiResponse::success(LikeResponse::from(state)),
        Err(resp) => resp,
    }
}

/// Share or unshare a post
#[utoipa::path(
    post,
    path = "/posts/{post_id}/share/",
    tag = "reactions",
    params(("post_id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "New share state and total", body = ShareResponse),
        (status = 401, description = "Missing or invalid token", body = ApiError),
        (status = 404, description = "Post not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError),
    ),
    security(("token_auth" = []))
)]
#[post("/posts/{post_id}/share/")]
pub async fn share_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match toggle(&data, ReactionKind::Share, user, path.into_inner()).await {
        Ok(state) => ApiResponse::success(ShareResponse::from(state)),
        Err(resp) => resp,
    }
}
