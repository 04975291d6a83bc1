use async_trait::async_trait;
use tracing::{debug, info};

use crate::auth::application::{domain::entities::UserId, ports::outgoing::UserQuery};
use crate::follow::application::{
    domain::entities::FollowToggle,
    ports::{
        incoming::use_cases::{ToggleFollowError, ToggleFollowUseCase},
        outgoing::{FollowQuery, FollowRepository, FollowRepositoryError},
    },
};

/// Follows or unfollows `followee`. Following yourself is permitted.
#[derive(Debug, Clone)]
pub struct ToggleFollowService<U, Q, R>
where
    U: UserQuery,
    Q: FollowQuery,
    R: FollowRepository,
{
    users: U,
    query: Q,
    repository: R,
}

impl<U, Q, R> ToggleFollowService<U, Q, R>
where
    U: UserQuery,
    Q: FollowQuery,
    R: FollowRepository,
{
    pub fn new(users: U, query: Q, repository: R) -> Self {
        Self {
            users,
            query,
            repository,
        }
    }
}

fn repo_error(e: impl std::fmt::Display) -> ToggleFollowError {
    ToggleFollowError::RepositoryError(e.to_string())
}

#[async_trait]
impl<U, Q, R> ToggleFollowUseCase for ToggleFollowService<U, Q, R>
where
    U: UserQuery,
    Q: FollowQuery,
    R: FollowRepository,
{
    async fn execute(
        &self,
        follower: UserId,
        followee: UserId,
    ) -> Result<FollowToggle, ToggleFollowError> {
        self.users
            .find_by_id(followee)
            .await
            .map_err(repo_error)?
            .ok_or(ToggleFollowError::UserNotFound)?;

        let following = if self
            .query
            .exists(follower, followee)
            .await
            .map_err(repo_error)?
        {
            self.repository
                .delete(follower, followee)
                .await
                .map_err(repo_error)?;
            false
        } else {
            match self.repository.insert(follower, followee).await {
                Ok(()) => {}
                Err(FollowRepositoryError::AlreadyExists) => {
                    debug!(%follower, %followee, "follow inserted concurrently");
                }
                Err(e) => return Err(repo_error(e)),
            }
            true
        };

        let followers_count = self
            .query
            .count_followers(followee)
            .await
            .map_err(repo_error)?;

        info!(%follower, %followee, following, "Follow toggled");
        Ok(FollowToggle {
            following,
            followers_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fakes::{user_record, InMemoryFollows, InMemoryUsers};
    use uuid::Uuid;

    type Service = ToggleFollowService<InMemoryUsers, InMemoryFollows, InMemoryFollows>;

    fn service(users: &InMemoryUsers, follows: &InMemoryFollows) -> Service {
        ToggleFollowService::new(users.clone(), follows.clone(), follows.clone())
    }

    #[tokio::test]
    async fn follow_then_unfollow() {
        let alice = user_record("alice");
        let bob = user_record("bob");
        let users = InMemoryUsers::with(vec![alice.clone(), bob.clone()]);
        let follows = InMemoryFollows::default();
        let service = service(&users, &follows);

        let first = service.execute(alice.id, bob.id).await.unwrap();
        assert_eq!(
            first,
            FollowToggle {
                following: true,
                followers_count: 1
            }
        );

        let second = service.execute(alice.id, bob.id).await.unwrap();
        assert_eq!(
            second,
            FollowToggle {
                following: false,
                followers_count: 0
            }
        );
    }

    #[tokio::test]
    async fn count_is_for_the_followee() {
        let alice = user_record("alice");
        let bob = user_record("bob");
        let carol = user_record("carol");
        let users = InMemoryUsers::with(vec![alice.clone(), bob.clone(), carol.clone()]);
        let follows = InMemoryFollows::default();
        let service = service(&users, &follows);

        service.execute(carol.id, bob.id).await.unwrap();
        service.execute(bob.id, alice.id).await.unwrap();
        let toggle = service.execute(alice.id, bob.id).await.unwrap();

        assert_eq!(toggle.followers_count, 2);
    }

    #[tokio::test]
    async fn self_follow_is_allowed() {
        let alice = user_record("alice");
        let users = InMemoryUsers::with(vec![alice.clone()]);

        let toggle = service(&users, &InMemoryFollows::default())
            .execute(alice.id, alice.id)
            .await
            .unwrap();

        assert!(toggle.following);
        assert_eq!(toggle.followers_count, 1);
    }

    #[tokio::test]
    async fn concurrent_insert_still_reports_following() {
        let alice = user_record("alice");
        let bob = user_record("bob");
        let users = InMemoryUsers::with(vec![alice.clone(), bob.clone()]);

        let toggle = service(&users, &InMemoryFollows::racing())
            .execute(alice.id, bob.id)
            .await
            .unwrap();

        assert!(toggle.following);
        assert_eq!(toggle.followers_count, 1);
    }

    #[tokio::test]
    async fn unknown_followee_is_not_found() {
        let alice = user_record("alice");
        let users = InMemoryUsers::with(vec![alice.clone()]);

        let result = service(&users, &InMemoryFollows::default())
            .execute(alice.id, UserId::from(Uuid::new_v4()))
            .await;

        assert!(matches!(result, Err(ToggleFollowError::UserNotFound)));
    }
}
