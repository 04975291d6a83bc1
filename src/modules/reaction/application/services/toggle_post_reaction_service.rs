use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::ports::outgoing::PostQuery;
use crate::reaction::application::{
    domain::entities::{ReactionKind, ReactionToggle},
    ports::{
        incoming::use_cases::{TogglePostReactionError, TogglePostReactionUseCase},
        outgoing::{ReactionQuery, ReactionRepository, ReactionRepositoryError},
    },
};

/// Flips a like or share for one (user, post) pair and reports the new total.
///
/// A second request racing ours to insert the same row is treated as a
/// success: either way the reaction ends up held by the actor.
#[derive(Debug, Clone)]
pub struct TogglePostReactionService<P, Q, R>
where
    P: PostQuery,
    Q: ReactionQuery,
    R: ReactionRepository,
{
    posts: P,
    query: Q,
    repository: R,
}

impl<P, Q, R> TogglePostReactionService<P, Q, R>
where
    P: PostQuery,
    Q: ReactionQuery,
    R: ReactionRepository,
{
    pub fn new(posts: P, query: Q, repository: R) -> Self {
        Self {
            posts,
            query,
            repository,
        }
    }
}

fn repo_error(e: impl std::fmt::Display) -> TogglePostReactionError {
    TogglePostReactionError::RepositoryError(e.to_string())
}

#[async_trait]
impl<P, Q, R> TogglePostReactionUseCase for TogglePostReactionService<P, Q, R>
where
    P: PostQuery,
    Q: ReactionQuery,
    R: ReactionRepository,
{
    async fn execute(
        &self,
        kind: ReactionKind,
        actor: UserId,
        post_id: Uuid,
    ) -> Result<ReactionToggle, TogglePostReactionError> {
        self.posts
            .find_by_id(post_id)
            .await
            .map_err(repo_error)?
            .ok_or(TogglePostReactionError::PostNotFound)?;

        let held = self
            .query
            .exists(kind, actor, post_id)
            .await
            .map_err(repo_error)?;

        let active = if held {
            self.repository
                .delete(kind, actor, post_id)
                .await
                .map_err(repo_error)?;
            false
        } else {
            match self.repository.insert(kind, actor, post_id).await {
                Ok(()) => {}
                Err(ReactionRepositoryError::AlreadyExists) => {
                    debug!(%kind, %actor, %post_id, "reaction inserted concurrently");
                }
                Err(e) => return Err(repo_error(e)),
            }
            true
        };

        let count = self.query.count(kind, post_id).await.map_err(repo_error)?;

        info!(%kind, %actor, %post_id, active, count, "Reaction toggled");
        Ok(ReactionToggle { active, count })
    }
}
