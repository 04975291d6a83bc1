use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::post::application::domain::entities::PostView;
use crate::post::application::ports::incoming::use_cases::CreatePostCommand;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    #[schema(example = "hello world")]
    pub content: Option<String>,
    #[schema(example = "posts/cat.png")]
    pub image: Option<String>,
    /// One of `text`, `image`, `mixed`. Defaults to `text`.
    #[schema(example = "text")]
    pub post_type: Option<String>,
}

/// Publish a post
///
/// The caller becomes the author regardless of the body.
#[utoipa::path(
    post,
    path = "/posts/",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostView),
        (
            status = 400,
            description = "Blank content or unknown post_type",
            body = ApiError,
            example = json!({ "error": "Content is required" })
        ),
        (status = 401, description = "Missing or invalid token", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError),
    ),
    security(("token_auth" = []))
)]
#[post("/posts/")]
pub async fn create_post_handler(
    user: AuthenticatedUser,
    req: web::Json<CreatePostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command =
        match CreatePostCommand::new(user.user_id, req.content, req.image, req.post_type) {
            Ok(cmd) => cmd,
            Err(e) => {
                warn!(user_id = %user.user_id, error = %e, "Invalid post input");
                return ApiResponse::bad_request(&e.to_string());
            }
        };

    match data.post.create.execute(command).await {
        Ok(post) => ApiResponse::created(post),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to create post");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::application::domain::entities::PostType;
    use crate::post::application::ports::incoming::use_cases::{
        CreatePostError, CreatePostUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{auth_header, token_store};
    use crate::tests::support::fixtures::{post_view, user_view};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::json;
    use uuid::Uuid;

    /// Echoes the command back as a freshly created post.
    struct MockCreatePost;

    #[async_trait]
    impl CreatePostUseCase for MockCreatePost {
        async fn execute(&self, command: CreatePostCommand) -> Result<PostView, CreatePostError> {
            let author = user_view(command.author(), "alice");
            let mut post = post_view(Uuid::new_v4(), author, command.content());
            post.image = command.image().map(str::to_string);
            post.post_type = command.post_type();
            Ok(post)
        }
    }

    struct MockCreatePostFailure;

    #[async_trait]
    impl CreatePostUseCase for MockCreatePostFailure {
        async fn execute(&self, _: CreatePostCommand) -> Result<PostView, CreatePostError> {
            Err(CreatePostError::RepositoryError("insert failed".into()))
        }
    }

    macro_rules! app {
        ($mock:expr) => {
            test::init_service(
                App::new()
                    .app_data(TestAppStateBuilder::default().with_create_post($mock).build())
                    .app_data(token_store())
                    .service(create_post_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_create_post_success() {
        let app = app!(MockCreatePost);

        let req = test::TestRequest::post()
            .uri("/posts/")
            .insert_header(auth_header())
            .set_json(json!({ "content": "look", "image": "posts/cat.png", "post_type": "mixed" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 201);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["content"], "look");
        assert_eq!(body["post_type"], PostType::Mixed.as_str());
        assert_eq!(body["likes_count"], 0);
        assert_eq!(body["comments"], json!([]));
    }

    #[actix_web::test]
    async fn test_blank_content_is_400() {
        let app = app!(MockCreatePost);

        let req = test::TestRequest::post()
            .uri("/posts/")
            .insert_header(auth_header())
            .set_json(json!({ "content": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Content is required");
    }

    #[actix_web::test]
    async fn test_unknown_post_type_is_400() {
        let app = app!(MockCreatePost);

        let req = test::TestRequest::post()
            .uri("/posts/")
            .insert_header(auth_header())
            .set_json(json!({ "content": "x", "post_type": "video" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_anonymous_is_401() {
        let app = app!(MockCreatePost);

        let req = test::TestRequest::post()
            .uri("/posts/")
            .set_json(json!({ "content": "x" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_repository_failure_is_500() {
        let app = app!(MockCreatePostFailure);

        let req = test::TestRequest::post()
            .uri("/posts/")
            .insert_header(auth_header())
            .set_json(json!({ "content": "x" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
    }
}
