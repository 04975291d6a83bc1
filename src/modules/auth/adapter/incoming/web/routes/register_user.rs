use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::application::domain::entities::AuthSession;
use crate::auth::application::ports::incoming::use_cases::{RegisterUserCommand, RegisterUserError};
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

/// Every field is optional at the JSON level so that missing values get the
/// same 400 message as blank ones.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    #[schema(example = "alice")]
    pub username: Option<String>,
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
    #[schema(example = "s3cret-pass")]
    pub password: Option<String>,
    #[schema(example = "Alice")]
    pub first_name: Option<String>,
    #[schema(example = "Liddell")]
    pub last_name: Option<String>,
}

fn map_register_error(err: RegisterUserError, username: &str) -> HttpResponse {
    match err {
        RegisterUserError::UsernameTaken
        | RegisterUserError::EmailTaken
        | RegisterUserError::CreationFailed => {
            warn!(username = %username, error = %err, "Registration rejected");
            ApiResponse::bad_request(&err.to_string())
        }
        other => {
            error!(username = %username, error = %other, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new account
///
/// Creates the user with an empty profile and issues an auth token.
#[utoipa::path(
    post,
    path = "/auth/register/",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "Account created", body = AuthSession),
        (
            status = 400,
            description = "Missing fields, invalid email or duplicate account",
            body = ApiError,
            example = json!({ "error": "Username already exists" })
        ),
        (status = 500, description = "Internal server error", body = ApiError),
    )
)]
#[post("/auth/register/")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let username = req.username.clone().unwrap_or_default();

    info!(username = %username, "User registration attempt");

    let command = match RegisterUserCommand::new(
        req.username,
        req.email,
        req.password,
        req.first_name,
        req.last_name,
    ) {
        Ok(cmd) => cmd,
        Err(e) => {
            warn!(username = %username, error = %e, "Invalid registration input");
            return ApiResponse::bad_request(&e.to_string());
        }
    };

    match data.auth.register.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user.id, username = %session.user.username, "User registered");
            ApiResponse::created(session)
        }
        Err(e) => map_register_error(e, &username),
    }
}
