use async_trait::async_trait;

use super::PostViewAssembler;
use crate::post::application::{
    domain::entities::PostView,
    ports::{
        incoming::use_cases::{UpdatePostCommand, UpdatePostError, UpdatePostUseCase},
        outgoing::{PostQuery, PostRepository, PostRepositoryError},
    },
};

/// Only the author may edit a post.
#[derive(Clone)]
pub struct UpdatePostService<Q, R>
where
    Q: PostQuery,
    R: PostRepository,
{
    query: Q,
    repository: R,
    assembler: PostViewAssembler,
}

impl<Q, R> UpdatePostService<Q, R>
where
    Q: PostQuery,
    R: PostRepository,
{
    pub fn new(query: Q, repository: R, assembler: PostViewAssembler) -> Self {
        Self {
            query,
            repository,
            assembler,
        }
    }
}

#[async_trait]
impl<Q, R> UpdatePostUseCase for UpdatePostService<Q, R>
where
    Q: PostQuery,
    R: PostRepository,
{
    async fn execute(&self, command: UpdatePostCommand) -> Result<PostView, UpdatePostError> {
        let existing = self
            .query
            .find_by_id(command.post_id())
            .await
            .map_err(|e| UpdatePostError::RepositoryError(e.to_string()))?
            .ok_or(UpdatePostError::NotFound)?;

        if existing.author_id != command.actor() {
            return Err(UpdatePostError::Forbidden);
        }

        let updated = self
            .repository
            .update(command.post_id(), command.changes().clone())
            .await
            .map_err(|e| match e {
                PostRepositoryError::NotFound => UpdatePostError::NotFound,
                other => UpdatePostError::RepositoryError(other.to_string()),
            })?;

        self.assembler
            .assemble_one(updated, Some(command.actor()))
            .await
            .map_err(|e| UpdatePostError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::application::domain::entities::PostType;
    use crate::post::application::ports::incoming::use_cases::UpdateMode;
    use crate::post::application::services::post_view_assembler::tests::assembler;
    use crate::tests::support::fakes::{
        user_record, InMemoryComments, InMemoryPosts, InMemoryReactions, InMemoryUsers,
    };
    use uuid::Uuid;

    fn service(
        posts: &InMemoryPosts,
        users: &InMemoryUsers,
    ) -> UpdatePostService<InMemoryPosts, InMemoryPosts> {
        UpdatePostService::new(
            posts.clone(),
            posts.clone(),
            assembler(users, &InMemoryReactions::default(), &InMemoryComments::default()),
        )
    }

    #[tokio::test]
    async fn author_can_patch() {
        let alice = user_record("alice");
        let users = InMemoryUsers::with(vec![alice.clone()]);
        let posts = InMemoryPosts::default();
        let post = posts.seed(alice.id, "draft", 0);

        let command = UpdatePostCommand::new(
            alice.id,
            post.id,
            UpdateMode::Partial,
            None,
            None,
            Some("image".into()),
        )
        .unwrap();
        let view = service(&posts, &users).execute(command).await.unwrap();

        assert_eq!(view.content, "draft");
        assert_eq!(view.post_type, PostType::Image);
    }

    #[tokio::test]
    async fn author_can_replace_content() {
        let alice = user_record("alice");
        let users = InMemoryUsers::with(vec![alice.clone()]);
        let posts = InMemoryPosts::default();
        let post = posts.seed(alice.id, "draft", 0);

        let command = UpdatePostCommand::new(
            alice.id,
            post.id,
            UpdateMode::Replace,
            Some("final".into()),
            None,
            None,
        )
        .unwrap();
        let view = service(&posts, &users).execute(command).await.unwrap();

        assert_eq!(view.content, "final");
    }

    #[tokio::test]
    async fn non_author_is_forbidden() {
        let alice = user_record("alice");
        let mallory = user_record("mallory");
        let users = InMemoryUsers::with(vec![alice.clone(), mallory.clone()]);
        let posts = InMemoryPosts::default();
        let post = posts.seed(alice.id, "mine", 0);

        let command = UpdatePostCommand::new(
            mallory.id,
            post.id,
            UpdateMode::Replace,
            Some("pwned".into()),
            None,
            None,
        )
        .unwrap();

        assert!(matches!(
            service(&posts, &users).execute(command).await,
            Err(UpdatePostError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn unknown_post_is_not_found() {
        let alice = user_record("alice");
        let users = InMemoryUsers::with(vec![alice.clone()]);
        let posts = InMemoryPosts::default();

        let command = UpdatePostCommand::new(
            alice.id,
            Uuid::new_v4(),
            UpdateMode::Partial,
            Some("x".into()),
            None,
            None,
        )
        .unwrap();

        assert!(matches!(
            service(&posts, &users).execute(command).await,
            Err(UpdatePostError::NotFound)
        ));
    }
}
