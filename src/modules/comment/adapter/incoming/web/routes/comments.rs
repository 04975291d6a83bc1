use actix_web::{get, post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::comment::application::domain::entities::CommentView;
use crate::comment::application::ports::incoming::use_cases::{
    CreateCommentCommand, CreateCommentError,
};
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    #[schema(example = "nice shot")]
    pub content: Option<String>,
}

/// Comments on a post, oldest first
///
/// An unknown post yields an empty list.
#[utoipa::path(
    get,
    path = "/posts/{post_id}/comments/",
    tag = "comments",
    params(("post_id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Comments, oldest first", body = [CommentView]),
        (status = 500, description = "Internal server error", body = ApiError),
    )
)]
#[get("/posts/{post_id}/comments/")]
pub async fn list_comments_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.comment.list.execute(post_id).await {
        Ok(comments) => ApiResponse::success(comments),
        Err(e) => {
            error!(%post_id, error = %e, "Failed to list comments");
            ApiResponse::internal_error()
        }
    }
}

/// Comment on a post
#[utoipa::path(
    post,
    path = "/posts/{post_id}/comments/",
    tag = "comments",
    params(("post_id" = Uuid, Path, description = "Post id")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentView),
        (status = 400, description = "Blank content", body = ApiError),
        (status = 401, description = "Missing or invalid token", body = ApiError),
        (status = 404, description = "Post not found", body = ApiError),
    ),
    security(("token_auth" = []))
)]
#[post("/posts/{post_id}/comments/")]
pub async fn create_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<CreateCommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    let command = match CreateCommentCommand::new(user.user_id, post_id, req.into_inner().content)
    {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.comment.create.execute(command).await {
        Ok(comment) => {
            info!(comment_id = %comment.id, %post_id, user_id = %user.user_id, "Comment created");
            ApiResponse::created(comment)
        }
        Err(CreateCommentError::PostNotFound) => ApiResponse::not_found("Post not found"),
        Err(e) => {
            error!(%post_id, user_id = %user.user_id, error = %e, "Failed to create comment");
            ApiResponse::internal_error()
        }
    }
}
