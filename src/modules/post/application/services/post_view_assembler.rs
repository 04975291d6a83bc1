use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::auth::application::services::{UserLookupError, UserViewCache};
use crate::comment::application::ports::outgoing::{CommentQuery, CommentQueryError};
use crate::comment::application::services::comment_views;
use crate::post::application::{domain::entities::PostView, ports::outgoing::PostRecord};
use crate::reaction::application::{
    domain::entities::ReactionKind,
    ports::outgoing::{ReactionQuery, ReactionQueryError},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AssembleError {
    #[error(transparent)]
    User(#[from] UserLookupError),

    #[error(transparent)]
    Reaction(#[from] ReactionQueryError),

    #[error(transparent)]
    Comment(#[from] CommentQueryError),
}

/// Turns post rows into `PostView`s: author, counts, comments and the
/// viewer's like/share flags. Counts are read live on every call.
#[derive(Clone)]
pub struct PostViewAssembler {
    users: Arc<dyn UserQuery>,
    reactions: Arc<dyn ReactionQuery>,
    comments: Arc<dyn CommentQuery>,
}

impl PostViewAssembler {
    pub fn new(
        users: Arc<dyn UserQuery>,
        reactions: Arc<dyn ReactionQuery>,
        comments: Arc<dyn CommentQuery>,
    ) -> Self {
        Self {
            users,
            reactions,
            comments,
        }
    }

    pub async fn assemble(
        &self,
        posts: Vec<PostRecord>,
        viewer: Option<UserId>,
    ) -> Result<Vec<PostView>, AssembleError> {
        let mut cache = UserViewCache::new(&*self.users);
        let mut views = Vec::with_capacity(posts.len());

        for post in posts {
            views.push(self.build(&mut cache, post, viewer).await?);
        }

        Ok(views)
    }

    pub async fn assemble_one(
        &self,
        post: PostRecord,
        viewer: Option<UserId>,
    ) -> Result<PostView, AssembleError> {
        let mut cache = UserViewCache::new(&*self.users);
        self.build(&mut cache, post, viewer).await
    }

    async fn build(
        &self,
        cache: &mut UserViewCache<'_, dyn UserQuery>,
        post: PostRecord,
        viewer: Option<UserId>,
    ) -> Result<PostView, AssembleError> {
        let author = cache.get(post.author_id).await?;

        let comment_rows = self.comments.list_for_post(post.id).await?;
        let comments_count = comment_rows.len() as u64;
        let comments = comment_views(cache, comment_rows).await?;

        let likes_count = self.reactions.count(ReactionKind::Like, post.id).await?;
        let shares_count = self.reactions.count(ReactionKind::Share, post.id).await?;

        let (is_liked, is_shared) = match viewer {
            Some(viewer) => (
                self.reactions
                    .exists(ReactionKind::Like, viewer, post.id)
                    .await?,
                self.reactions
                    .exists(ReactionKind::Share, viewer, post.id)
                    .await?,
            ),
            None => (false, false),
        };

        Ok(PostView {
            id: post.id,
            author,
            content: post.content,
            image: post.image,
            post_type: post.post_type,
            created_at: post.created_at,
            updated_at: post.updated_at,
            likes_count,
            comments_count,
            shares_count,
            comments,
            is_liked,
            is_shared,
        })
    }
}
