use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::Viewer;
use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::{PostView, RECENT_POSTS_LIMIT};
use crate::post::application::ports::outgoing::PostFilter;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

async fn respond_with_posts(data: &AppState, filter: PostFilter, viewer: Viewer) -> HttpResponse {
    match data.post.list.execute(filter, viewer.user_id).await {
        Ok(posts) => ApiResponse::success(posts),
        Err(e) => {
            error!(?filter, error = %e, "Failed to list posts");
            ApiResponse::internal_error()
        }
    }
}

/// List the feed
///
/// Every post, newest first. Anonymous callers are allowed; a valid token
/// fills in `is_liked` and `is_shared`.
#[utoipa::path(
    get,
    path = "/posts/",
    tag = "posts",
    responses(
        (status = 200, description = "All posts, newest first", body = [PostView]),
        (status = 401, description = "Invalid token", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError),
    ),
    security((), ("token_auth" = []))
)]
#[get("/posts/")]
pub async fn list_posts_handler(viewer: Viewer, data: web::Data<AppState>) -> impl Responder {
    respond_with_posts(&data, PostFilter::All, viewer).await
}

/// Latest posts
#[utoipa::path(
    get,
    path = "/posts/recent/",
    tag = "posts",
    responses(
        (status = 200, description = "The five newest posts", body = [PostView]),
        (status = 500, description = "Internal server error", body = ApiError),
    ),
    security((), ("token_auth" = []))
)]
#[get("/posts/recent/")]
pub async fn recent_posts_handler(viewer: Viewer, data: web::Data<AppState>) -> impl Responder {
    respond_with_posts(&data, PostFilter::Latest(RECENT_POSTS_LIMIT), viewer).await
}

/// Posts written by one user
///
/// An unknown user id yields an empty list.
#[utoipa::path(
    get,
    path = "/users/{user_id}/posts/",
    tag = "posts",
    params(("user_id" = Uuid, Path, description = "Author id")),
    responses(
        (status = 200, description = "The user's posts, newest first", body = [PostView]),
        (status = 404, description = "Malformed user id", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError),
    ),
    security((), ("token_auth" = []))
)]
#[get("/users/{user_id}/posts/")]
pub async fn user_posts_handler(
    path: web::Path<Uuid>,
    viewer: Viewer,
    data: web::Data<AppState>,
) -> impl Responder {
    let author = UserId::from(path.into_inner());
    respond_with_posts(&data, PostFilter::ByAuthor(author), viewer).await
}
