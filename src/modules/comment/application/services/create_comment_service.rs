use async_trait::async_trait;

use crate::auth::application::domain::entities::UserView;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::comment::application::{
    domain::entities::CommentView,
    ports::{
        incoming::use_cases::{CreateCommentCommand, CreateCommentError, CreateCommentUseCase},
        outgoing::{CommentRepository, CreateCommentData},
    },
};
use crate::post::application::ports::outgoing::PostQuery;

#[derive(Debug, Clone)]
pub struct CreateCommentService<P, C, U>
where
    P: PostQuery,
    C: CommentRepository,
    U: UserQuery,
{
    posts: P,
    comments: C,
    users: U,
}

impl<P, C, U> CreateCommentService<P, C, U>
where
    P: PostQuery,
    C: CommentRepository,
    U: UserQuery,
{
    pub fn new(posts: P, comments: C, users: U) -> Self {
        Self {
            posts,
            comments,
            users,
        }
    }
}

#[async_trait]
impl<P, C, U> CreateCommentUseCase for CreateCommentService<P, C, U>
where
    P: PostQuery,
    C: CommentRepository,
    U: UserQuery,
{
    async fn execute(
        &self,
        command: CreateCommentCommand,
    ) -> Result<CommentView, CreateCommentError> {
        self.posts
            .find_by_id(command.post_id())
            .await
            .map_err(|e| CreateCommentError::RepositoryError(e.to_string()))?
            .ok_or(CreateCommentError::PostNotFound)?;

        let author = self
            .users
            .find_by_id(command.author())
            .await
            .map_err(|e| CreateCommentError::RepositoryError(e.to_string()))?
            .ok_or_else(|| {
                CreateCommentError::RepositoryError(format!(
                    "comment author {} missing",
                    command.author()
                ))
            })?;

        let record = self
            .comments
            .create(CreateCommentData {
                post_id: command.post_id(),
                user_id: command.author(),
                content: command.content().to_string(),
            })
            .await
            .map_err(|e| CreateCommentError::RepositoryError(e.to_string()))?;

        Ok(CommentView::new(record, UserView::from(&author)))
    }
}
