use actix_web::{patch, put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::post::application::domain::entities::PostView;
use crate::post::application::ports::incoming::use_cases::{
    UpdateMode, UpdatePostCommand, UpdatePostError,
};
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    #[schema(example = "edited")]
    pub content: Option<String>,
    pub image: Option<String>,
    #[schema(example = "text")]
    pub post_type: Option<String>,
}

fn map_update_post_error(err: UpdatePostError, actor: &AuthenticatedUser, post_id: Uuid) -> HttpResponse {
    match err {
        UpdatePostError::NotFound => ApiResponse::not_found("Post not found"),
        UpdatePostError::Forbidden => {
            warn!(user_id = %actor.user_id, %post_id, "Post edit by non-author");
            ApiResponse::forbidden(&err.to_string())
        }
        other => {
            error!(user_id = %actor.user_id, %post_id, error = %other, "Failed to update post");
            ApiResponse::internal_error()
        }
    }
}

async fn apply_update(
    data: &AppState,
    user: AuthenticatedUser,
    post_id: Uuid,
    mode: UpdateMode,
    req: UpdatePostRequest,
) -> HttpResponse {
    let command = match UpdatePostCommand::new(
        user.user_id,
        post_id,
        mode,
        req.content,
        req.image,
        req.post_type,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.post.update.execute(command).await {
        Ok(post) => {
            info!(user_id = %user.user_id, %post_id, ?mode, "Post updated");
            ApiResponse::success(post)
        }
        Err(e) => map_update_post_error(e, &user, post_id),
    }
}

/// Replace a post
///
/// `content` is required; other fields keep their value when omitted.
#[utoipa::path(
    put,
    path = "/posts/{post_id}/",
    tag = "posts",
    params(("post_id" = Uuid, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Updated post", body = PostView),
        (status = 400, description = "Invalid input", body = ApiError),
        (status = 401, description = "Missing or invalid token", body = ApiError),
        (status = 403, description = "Caller is not the author", body = ApiError),
        (status = 404, description = "Post not found", body = ApiError),
    ),
    security(("token_auth" = []))
)]
#[put("/posts/{post_id}/")]
pub async fn replace_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdatePostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    apply_update(&data, user, path.into_inner(), UpdateMode::Replace, req.into_inner()).await
}

/// Partially update a post
#[utoipa::path(
    patch,
    path = "/posts/{post_id}/",
    tag = "posts",
    params(("post_id" = Uuid, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Updated post", body = PostView),
        (status = 400, description = "Invalid input", body = ApiError),
        (status = 401, description = "Missing or invalid token", body = ApiError),
        (status = 403, description = "Caller is not the author", body = ApiError),
        (status = 404, description = "Post not found", body = ApiError),
    ),
    security(("token_auth" = []))
)]
#[patch("/posts/{post_id}/")]
pub async fn patch_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdatePostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    apply_update(&data, user, path.into_inner(), UpdateMode::Partial, req.into_inner()).await
}
