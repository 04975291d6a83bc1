use std::sync::Arc;

use actix_web::web;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    FetchCurrentUserUseCase, LoginUserUseCase, LogoutUserUseCase, RegisterUserUseCase,
};
use crate::comment::application::comment_use_cases::CommentUseCases;
use crate::comment::application::ports::incoming::use_cases::{
    CreateCommentUseCase, ListCommentsUseCase,
};
use crate::follow::application::ports::incoming::use_cases::ToggleFollowUseCase;
use crate::post::application::ports::incoming::use_cases::{
    CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase, UpdatePostUseCase,
};
use crate::post::application::post_use_cases::PostUseCases;
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileUseCase, UpdateProfileUseCase,
};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::reaction::application::ports::incoming::use_cases::TogglePostReactionUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is a stub, letting each test
/// swap in only the ones it exercises.
pub struct TestAppStateBuilder {
    state: AppState,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            state: AppState {
                auth: AuthUseCases {
                    register: Arc::new(StubRegisterUserUseCase),
                    login: Arc::new(StubLoginUserUseCase),
                    logout: Arc::new(StubLogoutUserUseCase),
                    current_user: Arc::new(StubFetchCurrentUserUseCase),
                },
                profile: ProfileUseCases {
                    get: Arc::new(StubGetProfileUseCase),
                    update: Arc::new(StubUpdateProfileUseCase),
                },
                post: PostUseCases {
                    list: Arc::new(StubListPostsUseCase),
                    get: Arc::new(StubGetPostUseCase),
                    create: Arc::new(StubCreatePostUseCase),
                    update: Arc::new(StubUpdatePostUseCase),
                    delete: Arc::new(StubDeletePostUseCase),
                },
                comment: CommentUseCases {
                    list: Arc::new(StubListCommentsUseCase),
                    create: Arc::new(StubCreateCommentUseCase),
                },
                toggle_reaction_use_case: Arc::new(StubTogglePostReactionUseCase),
                toggle_follow_use_case: Arc::new(StubToggleFollowUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(mut self, uc: impl RegisterUserUseCase + 'static) -> Self {
        self.state.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.state.auth.login = Arc::new(uc);
        self
    }

    pub fn with_logout_user(mut self, uc: impl LogoutUserUseCase + 'static) -> Self {
        self.state.auth.logout = Arc::new(uc);
        self
    }

    pub fn with_current_user(mut self, uc: impl FetchCurrentUserUseCase + 'static) -> Self {
        self.state.auth.current_user = Arc::new(uc);
        self
    }

    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + 'static) -> Self {
        self.state.profile.get = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl UpdateProfileUseCase + 'static) -> Self {
        self.state.profile.update = Arc::new(uc);
        self
    }

    pub fn with_list_posts(mut self, uc: impl ListPostsUseCase + 'static) -> Self {
        self.state.post.list = Arc::new(uc);
        self
    }

    pub fn with_get_post(mut self, uc: impl GetPostUseCase + 'static) -> Self {
        self.state.post.get = Arc::new(uc);
        self
    }

    pub fn with_create_post(mut self, uc: impl CreatePostUseCase + 'static) -> Self {
        self.state.post.create = Arc::new(uc);
        self
    }

    pub fn with_update_post(mut self, uc: impl UpdatePostUseCase + 'static) -> Self {
        self.state.post.update = Arc::new(uc);
        self
    }

    pub fn with_delete_post(mut self, uc: impl DeletePostUseCase + 'static) -> Self {
        self.state.post.delete = Arc::new(uc);
        self
    }

    pub fn with_list_comments(mut self, uc: impl ListCommentsUseCase + 'static) -> Self {
        self.state.comment.list = Arc::new(uc);
        self
    }

    pub fn with_create_comment(mut self, uc: impl CreateCommentUseCase + 'static) -> Self {
        self.state.comment.create = Arc::new(uc);
        self
    }

    pub fn with_toggle_reaction(mut self, uc: impl TogglePostReactionUseCase + 'static) -> Self {
        self.state.toggle_reaction_use_case = Arc::new(uc);
        self
    }

    pub fn with_toggle_follow(mut self, uc: impl ToggleFollowUseCase + 'static) -> Self {
        self.state.toggle_follow_use_case = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(self.state)
    }
}
