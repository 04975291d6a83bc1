use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;
use tracing::error;

use crate::auth::application::{domain::entities::UserId, ports::outgoing::TokenRepository};
use crate::shared::api::ApiResponse;

/// A request carrying a valid token. Rejects anonymous requests with 401.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Whoever is looking: a user when a valid token is sent, anonymous when
/// none is. A token that is sent but unknown is still rejected.
#[derive(Debug, Clone, Copy)]
pub struct Viewer {
    pub user_id: Option<UserId>,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// Accepts `Token <key>` and `Bearer <key>`. Other schemes count as no credentials.
fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    let value = req.headers().get("Authorization")?.to_str().ok()?;

    value
        .strip_prefix("Token ")
        .or_else(|| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
}

type TokenStore = web::Data<Arc<dyn TokenRepository>>;

async fn resolve_user(tokens: Option<TokenStore>, key: String) -> Result<UserId, ActixError> {
    let tokens = tokens.ok_or_else(|| {
        error!("token repository is not registered as app data");
        create_api_error(ApiResponse::internal_error())
    })?;

    match tokens.find_user_by_key(&key).await {
        Ok(Some(user_id)) => Ok(user_id),
        Ok(None) => Err(create_api_error(ApiResponse::unauthorized(
            "Invalid token.",
        ))),
        Err(e) => {
            error!(error = %e, "token lookup failed");
            Err(create_api_error(ApiResponse::internal_error()))
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let tokens = req.app_data::<TokenStore>().cloned();
        let key = extract_token_from_header(req);

        Box::pin(async move {
            let key = key.ok_or_else(|| {
                create_api_error(ApiResponse::unauthorized(
                    "Authentication credentials were not provided.",
                ))
            })?;

            let user_id = resolve_user(tokens, key).await?;
            Ok(AuthenticatedUser { user_id })
        })
    }
}

impl FromRequest for Viewer {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let tokens = req.app_data::<TokenStore>().cloned();
        let key = extract_token_from_header(req);

        Box::pin(async move {
            match key {
                None => Ok(Viewer { user_id: None }),
                Some(key) => Ok(Viewer {
                    user_id: Some(resolve_user(tokens, key).await?),
                }),
            }
        })
    }
}
