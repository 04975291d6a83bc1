use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserView};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::profile::application::{
    domain::entities::ProfileView,
    ports::{
        incoming::use_cases::{GetProfileError, GetProfileUseCase},
        outgoing::ProfileRepository,
    },
};

#[derive(Debug, Clone)]
pub struct GetProfileService<U, P>
where
    U: UserQuery,
    P: ProfileRepository,
{
    users: U,
    profiles: P,
}

impl<U, P> GetProfileService<U, P>
where
    U: UserQuery,
    P: ProfileRepository,
{
    pub fn new(users: U, profiles: P) -> Self {
        Self { users, profiles }
    }
}

#[async_trait]
impl<U, P> GetProfileUseCase for GetProfileService<U, P>
where
    U: UserQuery,
    P: ProfileRepository,
{
    async fn execute(&self, user_id: UserId) -> Result<ProfileView, GetProfileError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|e| GetProfileError::RepositoryError(e.to_string()))?
            .ok_or(GetProfileError::UserNotFound)?;

        let profile = self
            .profiles
            .get_or_create(user_id)
            .await
            .map_err(|e| GetProfileError::RepositoryError(e.to_string()))?;

        Ok(ProfileView::new(profile, UserView::from(&user)))
    }
}
