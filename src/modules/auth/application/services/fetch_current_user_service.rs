use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{CurrentUser, UserId, UserView},
    ports::{
        incoming::use_cases::{FetchCurrentUserError, FetchCurrentUserUseCase},
        outgoing::UserQuery,
    },
};
use crate::profile::application::{
    domain::entities::ProfileView, ports::outgoing::ProfileRepository,
};

#[derive(Debug, Clone)]
pub struct FetchCurrentUserService<Q, P>
where
    Q: UserQuery,
    P: ProfileRepository,
{
    query: Q,
    profiles: P,
}

impl<Q, P> FetchCurrentUserService<Q, P>
where
    Q: UserQuery,
    P: ProfileRepository,
{
    pub fn new(query: Q, profiles: P) -> Self {
        Self { query, profiles }
    }
}

#[async_trait]
impl<Q, P> FetchCurrentUserUseCase for FetchCurrentUserService<Q, P>
where
    Q: UserQuery,
    P: ProfileRepository,
{
    async fn execute(&self, user_id: UserId) -> Result<CurrentUser, FetchCurrentUserError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchCurrentUserError::RepositoryError(e.to_string()))?
            .ok_or(FetchCurrentUserError::UserNotFound)?;

        let profile = self
            .profiles
            .get_or_create(user_id)
            .await
            .map_err(|e| FetchCurrentUserError::RepositoryError(e.to_string()))?;

        let user = UserView::from(&user);
        Ok(CurrentUser {
            profile: ProfileView::new(profile, user.clone()),
            user,
        })
    }
}
