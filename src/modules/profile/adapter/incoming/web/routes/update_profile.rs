use actix_web::{route, web, HttpResponse, Responder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::ProfileView;
use crate::profile::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError,
};
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

/// PUT and PATCH both treat absent fields as "leave unchanged".
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub bio: Option<String>,
    pub location: Option<String>,
    #[schema(value_type = Option<String>, format = Date, example = "1990-04-01")]
    pub birth_date: Option<NaiveDate>,
    pub avatar: Option<String>,
    pub cover_photo: Option<String>,
}

fn map_update_profile_error(err: UpdateProfileError, actor: UserId, target: UserId) -> HttpResponse {
    match err {
        UpdateProfileError::Forbidden => {
            warn!(actor = %actor, target = %target, "Profile write by non-owner");
            ApiResponse::forbidden(&err.to_string())
        }
        UpdateProfileError::UserNotFound => ApiResponse::not_found("User not found"),
        other => {
            error!(actor = %actor, target = %target, error = %other, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}

async fn apply_update(
    data: &AppState,
    actor: UserId,
    target: UserId,
    req: UpdateProfileRequest,
) -> HttpResponse {
    let command = match UpdateProfileCommand::new(
        actor,
        target,
        req.bio,
        req.location,
        req.birth_date,
        req.avatar,
        req.cover_photo,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.profile.update.execute(command).await {
        Ok(profile) => {
            info!(user_id = %target, "Profile updated");
            ApiResponse::success(profile)
        }
        Err(e) => map_update_profile_error(e, actor, target),
    }
}

/// Update the caller's profile
#[utoipa::path(
    method(put, patch),
    path = "/profile/",
    tag = "profiles",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = ProfileView),
        (
            status = 400,
            description = "Bio or location too long",
            body = ApiError,
            example = json!({ "error": "Bio must not exceed 500 characters" })
        ),
        (status = 401, description = "Missing or invalid token", body = ApiError),
        (status = 403, description = "Profile belongs to someone else", body = ApiError),
        (status = 404, description = "User not found", body = ApiError),
    ),
    security(("token_auth" = []))
)]
#[route("/profile/", method = "PUT", method = "PATCH")]
pub async fn update_own_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    apply_update(&data, user.user_id, user.user_id, req.into_inner()).await
}

/// Update a profile by user id
///
/// Only the owner may write it.
#[utoipa::path(
    method(put, patch),
    path = "/users/{user_id}/profile/",
    tag = "profiles",
    params(("user_id" = Uuid, Path, description = "User id")),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = ProfileView),
        (
            status = 400,
            description = "Bio or location too long",
            body = ApiError,
            example = json!({ "error": "Bio must not exceed 500 characters" })
        ),
        (status = 401, description = "Missing or invalid token", body = ApiError),
        (status = 403, description = "Profile belongs to someone else", body = ApiError),
        (status = 404, description = "User not found", body = ApiError),
    ),
    security(("token_auth" = []))
)]
#[route("/users/{user_id}/profile/", method = "PUT", method = "PATCH")]
pub async fn update_user_profile_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = UserId::from(path.into_inner());
    apply_update(&data, user.user_id, target, req.into_inner()).await
}
