use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::UserQuery;
use crate::auth::application::services::{UserLookupError, UserViewCache};
use crate::comment::application::{
    domain::entities::CommentView,
    ports::{
        incoming::use_cases::{ListCommentsError, ListCommentsUseCase},
        outgoing::{CommentQuery, CommentRecord},
    },
};

/// Attaches author views to comment rows, keeping their order.
pub async fn comment_views<U: UserQuery + ?Sized>(
    cache: &mut UserViewCache<'_, U>,
    records: Vec<CommentRecord>,
) -> Result<Vec<CommentView>, UserLookupError> {
    let mut views = Vec::with_capacity(records.len());
    for record in records {
        let user = cache.get(record.user_id).await?;
        views.push(CommentView::new(record, user));
    }
    Ok(views)
}

#[derive(Debug, Clone)]
pub struct ListCommentsService<C, U>
where
    C: CommentQuery,
    U: UserQuery,
{
    comments: C,
    users: U,
}

impl<C, U> ListCommentsService<C, U>
where
    C: CommentQuery,
    U: UserQuery,
{
    pub fn new(comments: C, users: U) -> Self {
        Self { comments, users }
    }
}

#[async_trait]
impl<C, U> ListCommentsUseCase for ListCommentsService<C, U>
where
    C: CommentQuery,
    U: UserQuery,
{
    async fn execute(&self, post_id: Uuid) -> Result<Vec<CommentView>, ListCommentsError> {
        let records = self
            .comments
            .list_for_post(post_id)
            .await
            .map_err(|e| ListCommentsError::RepositoryError(e.to_string()))?;

        let mut cache = UserViewCache::new(&self.users);
        comment_views(&mut cache, records)
            .await
            .map_err(|e| ListCommentsError::RepositoryError(e.to_string()))
    }
}
