use actix_web::{post, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::follow::application::domain::entities::FollowToggle;
use crate::follow::application::ports::incoming::use_cases::ToggleFollowError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

/// Follow or unfollow a user
#[utoipa::path(
    post,
    path = "/users/{user_id}/follow/",
    tag = "users",
    params(("user_id" = Uuid, Path, description = "User to follow")),
    responses(
        (status = 200, description = "New follow state and follower total", body = FollowToggle),
        (status = 401, description = "Missing or invalid token", body = ApiError),
        (status = 404, description = "User not found", body = ApiError),
    ),
    security(("token_auth" = []))
)]
#[post("/users/{user_id}/follow/")]
pub async fn follow_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let followee = UserId::from(path.into_inner());

    match data
        .toggle_follow_use_case
        .execute(user.user_id, followee)
        .await
    {
        Ok(state) => {
            info!(follower = %user.user_id, %followee, following = state.following, "Follow toggled");
            ApiResponse::success(state)
        }
        Err(ToggleFollowError::UserNotFound) => ApiResponse::not_found("User not found"),
        Err(e) => {
            error!(follower = %user.user_id, %followee, error = %e, "Follow toggle failed");
            ApiResponse::internal_error()
        }
    }
}
