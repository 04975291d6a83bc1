use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::application::domain::entities::AuthSession;
use crate::auth::application::ports::incoming::use_cases::{LoginCommand, LoginError};
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginUserRequest {
    #[schema(example = "alice")]
    pub username: Option<String>,
    #[schema(example = "s3cret-pass")]
    pub password: Option<String>,
}

fn map_login_error(err: LoginError, username: &str) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials => {
            warn!(username = %username, "Login rejected");
            ApiResponse::unauthorized("Invalid credentials")
        }
        other => {
            error!(username = %username, error = %other, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

/// Log in with username and password
///
/// Returns the user's existing token, or a new one if none is active.
#[utoipa::path(
    post,
    path = "/auth/login/",
    tag = "auth",
    request_body = LoginUserRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthSession),
        (
            status = 400,
            description = "Missing username or password",
            body = ApiError,
            example = json!({ "error": "Username and password are required" })
        ),
        (
            status = 401,
            description = "Wrong username or password",
            body = ApiError,
            example = json!({ "error": "Invalid credentials" })
        ),
        (status = 500, description = "Internal server error", body = ApiError),
    )
)]
#[post("/auth/login/")]
pub async fn login_user_handler(
    req: web::Json<LoginUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let username = req.username.clone().unwrap_or_default();

    let command = match LoginCommand::new(req.username, req.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.auth.login.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "User logged in");
            ApiResponse::success(session)
        }
        Err(e) => map_login_error(e, &username),
    }
}
