use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::LogoutError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponse {
    #[schema(example = "Successfully logged out")]
    pub message: String,
}

/// Log out
///
/// Deletes the caller's token; it stops working immediately.
#[utoipa::path(
    post,
    path = "/auth/logout/",
    tag = "auth",
    security(("token_auth" = [])),
    responses(
        (status = 200, description = "Token deleted", body = LogoutResponse),
        (
            status = 400,
            description = "No token to delete",
            body = ApiError,
            example = json!({ "error": "Error logging out" })
        ),
        (status = 401, description = "Missing or invalid token", body = ApiError),
    )
)]
#[post("/auth/logout/")]
pub async fn logout_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.logout.execute(user.user_id).await {
        Ok(()) => {
            info!(user_id = %user.user_id, "User logged out");
            ApiResponse::success(LogoutResponse {
                message: "Successfully logged out".to_string(),
            })
        }
        Err(LogoutError::NoActiveToken) => {
            warn!(user_id = %user.user_id, "Logout found no token to delete");
            ApiResponse::bad_request("Error logging out")
        }
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Logout failed");
            ApiResponse::bad_request("Error logging out")
        }
    }
}
