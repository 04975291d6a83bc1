use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    LoginUserRequest, LogoutResponse, RegisterUserRequest,
};
use crate::auth::application::domain::entities::{AuthSession, CurrentUser, UserView};
use crate::comment::adapter::incoming::web::routes::CreateCommentRequest;
use crate::comment::application::domain::entities::CommentView;
use crate::follow::application::domain::entities::FollowToggle;
use crate::post::adapter::incoming::web::routes::{CreatePostRequest, UpdatePostRequest};
use crate::post::application::domain::entities::{PostType, PostView};
use crate::profile::adapter::incoming::web::routes::UpdateProfileRequest;
use crate::profile::application::domain::entities::ProfileView;
use crate::reaction::application::domain::entities::{LikeResponse, ShareResponse};
use crate::shared::api::ApiError;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Social Backend API",
        version = "1.0.0",
        description = "Users, posts, comments, likes, shares and follows"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::current_user_handler,

        // Post endpoints
        crate::post::adapter::incoming::web::routes::list_posts_handler,
        crate::post::adapter::incoming::web::routes::recent_posts_handler,
        crate::post::adapter::incoming::web::routes::user_posts_handler,
        crate::post::adapter::incoming::web::routes::get_post_handler,
        crate::post::adapter::incoming::web::routes::create_post_handler,
        crate::post::adapter::incoming::web::routes::replace_post_handler,
        crate::post::adapter::incoming::web::routes::patch_post_handler,
        crate::post::adapter::incoming::web::routes::delete_post_handler,

        // Reaction endpoints
        crate::reaction::adapter::incoming::web::routes::like_post_handler,
        crate::reaction::adapter::incoming::web::routes::share_post_handler,

        // Comment endpoints
        crate::comment::adapter::incoming::web::routes::list_comments_handler,
        crate::comment::adapter::incoming::web::routes::create_comment_handler,

        // Profile endpoints
        crate::profile::adapter::incoming::web::routes::get_own_profile_handler,
        crate::profile::adapter::incoming::web::routes::get_user_profile_handler,
        crate::profile::adapter::incoming::web::routes::update_own_profile_handler,
        crate::profile::adapter::incoming::web::routes::update_user_profile_handler,

        // User endpoints
        crate::follow::adapter::incoming::web::routes::follow_user_handler,
    ),
    components(
        schemas(
            ApiError,

            // Auth DTOs
            RegisterUserRequest,
            LoginUserRequest,
            LogoutResponse,
            AuthSession,
            CurrentUser,
            UserView,

            // Content DTOs
            CreatePostRequest,
            UpdatePostRequest,
            PostType,
            PostView,
            CreateCommentRequest,
            CommentView,
            LikeResponse,
            ShareResponse,

            // Profile DTOs
            UpdateProfileRequest,
            ProfileView,
            FollowToggle
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and sessions"),
        (name = "posts", description = "Feed and post management"),
        (name = "reactions", description = "Like and share toggles"),
        (name = "comments", description = "Post comments"),
        (name = "profiles", description = "User profiles"),
        (name = "users", description = "Follow relationships"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token_auth",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "Authorization",
                    "Send `Token <key>` (or `Bearer <key>`) as issued by login or register",
                ))),
            )
        }
    }
}
