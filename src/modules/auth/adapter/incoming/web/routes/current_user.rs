use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::Viewer;
use crate::auth::application::domain::entities::CurrentUser;
use crate::auth::application::ports::incoming::use_cases::FetchCurrentUserError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

/// Who am I
///
/// Anonymous callers get 401 from the handler rather than the auth gate.
#[utoipa::path(
    get,
    path = "/auth/user/",
    tag = "auth",
    security(("token_auth" = [])),
    responses(
        (status = 200, description = "The caller's account and profile", body = CurrentUser),
        (
            status = 401,
            description = "No token sent",
            body = ApiError,
            example = json!({ "error": "Not authenticated" })
        ),
    )
)]
#[get("/auth/user/")]
pub async fn current_user_handler(viewer: Viewer, data: web::Data<AppState>) -> impl Responder {
    let Some(user_id) = viewer.user_id else {
        return ApiResponse::unauthorized("Not authenticated");
    };

    match data.auth.current_user.execute(user_id).await {
        Ok(current) => ApiResponse::success(current),
        Err(FetchCurrentUserError::UserNotFound) => ApiResponse::unauthorized("Not authenticated"),
        Err(e) => {
            error!(user_id = %user_id, error = %e, "Failed to load current user");
            ApiResponse::internal_error()
        }
    }
}
