pub mod modules;
pub use modules::{auth, comment, follow, post, profile, reaction};

mod api;
mod config;
mod health;
mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::token_repository_postgres::TokenRepositoryPostgres;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenRepository};
use crate::auth::application::services::{
    FetchCurrentUserService, LoginUserService, LogoutUserService, RegisterUserService,
};
use crate::comment::adapter::outgoing::{CommentQueryPostgres, CommentRepositoryPostgres};
use crate::comment::application::comment_use_cases::CommentUseCases;
use crate::comment::application::ports::incoming::use_cases::{
    CreateCommentUseCase, ListCommentsUseCase,
};
use crate::comment::application::services::{CreateCommentService, ListCommentsService};
use crate::config::AppConfig;
use crate::follow::adapter::outgoing::{FollowQueryPostgres, FollowRepositoryPostgres};
use crate::follow::application::ports::incoming::use_cases::ToggleFollowUseCase;
use crate::follow::application::services::ToggleFollowService;
use crate::post::adapter::outgoing::{PostQueryPostgres, PostRepositoryPostgres};
use crate::post::application::post_use_cases::PostUseCases;
use crate::post::application::services::{
    CreatePostService, DeletePostService, GetPostService, ListPostsService, PostViewAssembler,
    UpdatePostService,
};
use crate::profile::adapter::outgoing::ProfileRepositoryPostgres;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::services::{GetProfileService, UpdateProfileService};
use crate::reaction::adapter::outgoing::{ReactionQueryPostgres, ReactionRepositoryPostgres};
use crate::reaction::application::ports::incoming::use_cases::TogglePostReactionUseCase;
use crate::reaction::application::services::TogglePostReactionService;
use crate::shared::api::{custom_json_config, custom_path_config};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub profile: ProfileUseCases,
    pub post: PostUseCases,
    pub comment: CommentUseCases,
    pub toggle_reaction_use_case: Arc<dyn TogglePostReactionUseCase>,
    pub toggle_follow_use_case: Arc<dyn ToggleFollowUseCase>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().expect("Invalid configuration");
    let server_url = config.server_url();
    info!(%server_url, environment = %env, "Configuration loaded");

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");
    let db_arc = Arc::new(conn);

    let password_hasher: Arc<dyn PasswordHasher> =
        Arc::new(Argon2Hasher::new(&config.argon2).expect("Invalid Argon2 parameters"));

    // Outgoing adapters
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let token_repo = TokenRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let post_query = PostQueryPostgres::new(Arc::clone(&db_arc));
    let post_repo = PostRepositoryPostgres::new(Arc::clone(&db_arc));
    let comment_query = CommentQueryPostgres::new(Arc::clone(&db_arc));
    let comment_repo = CommentRepositoryPostgres::new(Arc::clone(&db_arc));
    let reaction_query = ReactionQueryPostgres::new(Arc::clone(&db_arc));
    let reaction_repo = ReactionRepositoryPostgres::new(Arc::clone(&db_arc));
    let follow_query = FollowQueryPostgres::new(Arc::clone(&db_arc));
    let follow_repo = FollowRepositoryPostgres::new(Arc::clone(&db_arc));

    let assembler = PostViewAssembler::new(
        Arc::new(user_query.clone()),
        Arc::new(reaction_query.clone()),
        Arc::new(comment_query.clone()),
    );

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_query.clone(),
            user_repo,
            Arc::clone(&password_hasher),
        )),
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            profile_repo.clone(),
            token_repo.clone(),
            password_hasher,
        )),
        logout: Arc::new(LogoutUserService::new(token_repo.clone())),
        current_user: Arc::new(FetchCurrentUserService::new(
            user_query.clone(),
            profile_repo.clone(),
        )),
    };

    let profile = ProfileUseCases {
        get: Arc::new(GetProfileService::new(user_query.clone(), profile_repo.clone())),
        update: Arc::new(UpdateProfileService::new(user_query.clone(), profile_repo)),
    };

    let post = PostUseCases {
        list: Arc::new(ListPostsService::new(post_query.clone(), assembler.clone())),
        get: Arc::new(GetPostService::new(post_query.clone(), assembler.clone())),
        create: Arc::new(CreatePostService::new(post_repo.clone(), assembler.clone())),
        update: Arc::new(UpdatePostService::new(
            post_query.clone(),
            post_repo.clone(),
            assembler,
        )),
        delete: Arc::new(DeletePostService::new(post_query.clone(), post_repo)),
    };

    let list_comments: Arc<dyn ListCommentsUseCase> = Arc::new(ListCommentsService::new(
        comment_query,
        user_query.clone(),
    ));
    let create_comment: Arc<dyn CreateCommentUseCase> = Arc::new(CreateCommentService::new(
        post_query.clone(),
        comment_repo,
        user_query.clone(),
    ));

    let state = AppState {
        auth,
        profile,
        post,
        comment: CommentUseCases {
            list: list_comments,
            create: create_comment,
        },
        toggle_reaction_use_case: Arc::new(TogglePostReactionService::new(
            post_query,
            reaction_query,
            reaction_repo,
        )),
        toggle_follow_use_case: Arc::new(ToggleFollowService::new(
            user_query,
            follow_query,
            follow_repo,
        )),
    };

    // Extractors resolve tokens through this handle.
    let token_store: Arc<dyn TokenRepository> = Arc::new(token_repo);
    let db_for_server = Arc::clone(&db_arc);

    info!(%server_url, "Server starting");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_store)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::comment::adapter::incoming::web::routes as comment_routes;
    use crate::follow::adapter::incoming::web::routes as follow_routes;
    use crate::post::adapter::incoming::web::routes as post_routes;
    use crate::profile::adapter::incoming::web::routes as profile_routes;
    use crate::reaction::adapter::incoming::web::routes as reaction_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::logout_user_handler);
    cfg.service(auth_routes::current_user_handler);
    // Posts: the literal /posts/recent/ must precede /posts/{post_id}/
    cfg.service(post_routes::recent_posts_handler);
    cfg.service(post_routes::list_posts_handler);
    cfg.service(post_routes::create_post_handler);
    cfg.service(post_routes::get_post_handler);
    cfg.service(post_routes::replace_post_handler);
    cfg.service(post_routes::patch_post_handler);
    cfg.service(post_routes::delete_post_handler);
    cfg.service(post_routes::user_posts_handler);
    // Reactions
    cfg.service(reaction_routes::like_post_handler);
    cfg.service(reaction_routes::share_post_handler);
    // Comments
    cfg.service(comment_routes::list_comments_handler);
    cfg.service(comment_routes::create_comment_handler);
    // Profiles
    cfg.service(profile_routes::get_own_profile_handler);
    cfg.service(profile_routes::update_own_profile_handler);
    cfg.service(profile_routes::get_user_profile_handler);
    cfg.service(profile_routes::update_user_profile_handler);
    // Follows
    cfg.service(follow_routes::follow_user_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
