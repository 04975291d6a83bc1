//! Default use cases for `TestAppStateBuilder`. Each one fails loudly with a
//! repository error so a test that hits an unexpected use case notices.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AuthSession, CurrentUser, UserId};
use crate::auth::application::ports::incoming::use_cases::{
    FetchCurrentUserError, FetchCurrentUserUseCase, LoginCommand, LoginError, LoginUserUseCase,
    LogoutError, LogoutUserUseCase, RegisterUserCommand, RegisterUserError, RegisterUserUseCase,
};
use crate::comment::application::domain::entities::CommentView;
use crate::comment::application::ports::incoming::use_cases::{
    CreateCommentCommand, CreateCommentError, CreateCommentUseCase, ListCommentsError,
    ListCommentsUseCase,
};
use crate::follow::application::domain::entities::FollowToggle;
use crate::follow::application::ports::incoming::use_cases::{
    ToggleFollowError, ToggleFollowUseCase,
};
use crate::post::application::domain::entities::PostView;
use crate::post::application::ports::incoming::use_cases::{
    CreatePostCommand, CreatePostError, CreatePostUseCase, DeletePostError, DeletePostUseCase,
    GetPostError, GetPostUseCase, ListPostsError, ListPostsUseCase, UpdatePostCommand,
    UpdatePostError, UpdatePostUseCase,
};
use crate::post::application::ports::outgoing::PostFilter;
use crate::profile::application::domain::entities::ProfileView;
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase, UpdateProfileCommand, UpdateProfileError,
    UpdateProfileUseCase,
};
use crate::reaction::application::domain::entities::{ReactionKind, ReactionToggle};
use crate::reaction::application::ports::incoming::use_cases::{
    TogglePostReactionError, TogglePostReactionUseCase,
};

const UNUSED: &str = "not used in this test";

pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _: RegisterUserCommand) -> Result<AuthSession, RegisterUserError> {
        Err(RegisterUserError::RepositoryError(UNUSED.into()))
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _: LoginCommand) -> Result<AuthSession, LoginError> {
        Err(LoginError::RepositoryError(UNUSED.into()))
    }
}

pub struct StubLogoutUserUseCase;

#[async_trait]
impl LogoutUserUseCase for StubLogoutUserUseCase {
    async fn execute(&self, _: UserId) -> Result<(), LogoutError> {
        Err(LogoutError::RepositoryError(UNUSED.into()))
    }
}

pub struct StubFetchCurrentUserUseCase;

#[async_trait]
impl FetchCurrentUserUseCase for StubFetchCurrentUserUseCase {
    async fn execute(&self, _: UserId) -> Result<CurrentUser, FetchCurrentUserError> {
        Err(FetchCurrentUserError::RepositoryError(UNUSED.into()))
    }
}

pub struct StubGetProfileUseCase;

#[async_trait]
impl GetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self, _: UserId) -> Result<ProfileView, GetProfileError> {
        Err(GetProfileError::RepositoryError(UNUSED.into()))
    }
}

pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(&self, _: UpdateProfileCommand) -> Result<ProfileView, UpdateProfileError> {
        Err(UpdateProfileError::RepositoryError(UNUSED.into()))
    }
}

pub struct StubListPostsUseCase;

#[async_trait]
impl ListPostsUseCase for StubListPostsUseCase {
    async fn execute(
        &self,
        _: PostFilter,
        _: Option<UserId>,
    ) -> Result<Vec<PostView>, ListPostsError> {
        Err(ListPostsError::RepositoryError(UNUSED.into()))
    }
}

pub struct StubGetPostUseCase;

#[async_trait]
impl GetPostUseCase for StubGetPostUseCase {
    async fn execute(&self, _: Uuid, _: Option<UserId>) -> Result<PostView, GetPostError> {
        Err(GetPostError::RepositoryError(UNUSED.into()))
    }
}

pub struct StubCreatePostUseCase;

#[async_trait]
impl CreatePostUseCase for StubCreatePostUseCase {
    async fn execute(&self, _: CreatePostCommand) -> Result<PostView, CreatePostError> {
        Err(CreatePostError::RepositoryError(UNUSED.into()))
    }
}

pub struct StubUpdatePostUseCase;

#[async_trait]
impl UpdatePostUseCase for StubUpdatePostUseCase {
    async fn execute(&self, _: UpdatePostCommand) -> Result<PostView, UpdatePostError> {
        Err(UpdatePostError::RepositoryError(UNUSED.into()))
    }
}

pub struct StubDeletePostUseCase;

#[async_trait]
impl DeletePostUseCase for StubDeletePostUseCase {
    async fn execute(&self, _: UserId, _: Uuid) -> Result<(), DeletePostError> {
        Err(DeletePostError::RepositoryError(UNUSED.into()))
    }
}

pub struct StubListCommentsUseCase;

#[async_trait]
impl ListCommentsUseCase for StubListCommentsUseCase {
    async fn execute(&self, _: Uuid) -> Result<Vec<CommentView>, ListCommentsError> {
        Err(ListCommentsError::RepositoryError(UNUSED.into()))
    }
}

pub struct StubCreateCommentUseCase;

#[async_trait]
impl CreateCommentUseCase for StubCreateCommentUseCase {
    async fn execute(&self, _: CreateCommentCommand) -> Result<CommentView, CreateCommentError> {
        Err(CreateCommentError::RepositoryError(UNUSED.into()))
    }
}

pub struct StubTogglePostReactionUseCase;

#[async_trait]
impl TogglePostReactionUseCase for StubTogglePostReactionUseCase {
    async fn execute(
        &self,
        _: ReactionKind,
        _: UserId,
        _: Uuid,
    ) -> Result<ReactionToggle, TogglePostReactionError> {
        Err(TogglePostReactionError::RepositoryError(UNUSED.into()))
    }
}

pub struct StubToggleFollowUseCase;

#[async_trait]
impl ToggleFollowUseCase for StubToggleFollowUseCase {
    async fn execute(&self, _: UserId, _: UserId) -> Result<FollowToggle, ToggleFollowError> {
        Err(ToggleFollowError::RepositoryError(UNUSED.into()))
    }
}
