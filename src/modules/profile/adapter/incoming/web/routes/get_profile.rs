use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::ProfileView;
use crate::profile::application::ports::incoming::use_cases::GetProfileError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

async fn respond_with_profile(data: &AppState, user_id: UserId) -> HttpResponse {
    match data.profile.get.execute(user_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(GetProfileError::UserNotFound) => ApiResponse::not_found("User not found"),
        Err(e) => {
            error!(user_id = %user_id, error = %e, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}

/// The caller's own profile
///
/// Created empty on first access.
#[utoipa::path(
    get,
    path = "/profile/",
    tag = "profiles",
    responses(
        (status = 200, description = "Caller's profile", body = ProfileView),
        (status = 401, description = "Missing or invalid token", body = ApiError),
    ),
    security(("token_auth" = []))
)]
#[get("/profile/")]
pub async fn get_own_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    respond_with_profile(&data, user.user_id).await
}

/// Any user's profile
#[utoipa::path(
    get,
    path = "/users/{user_id}/profile/",
    tag = "profiles",
    params(("user_id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "The user's profile", body = ProfileView),
        (status = 404, description = "User not found", body = ApiError),
    )
)]
#[get("/users/{user_id}/profile/")]
pub async fn get_user_profile_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond_with_profile(&data, UserId::from(path.into_inner())).await
}
