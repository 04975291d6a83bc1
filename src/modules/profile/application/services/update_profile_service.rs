use async_trait::async_trait;

use crate::auth::application::domain::entities::UserView;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::profile::application::{
    domain::entities::ProfileView,
    ports::{
        incoming::use_cases::{UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase},
        outgoing::{ProfileRepository, ProfileRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateProfileService<U, P>
where
    U: UserQuery,
    P: ProfileRepository,
{
    users: U,
    profiles: P,
}

impl<U, P> UpdateProfileService<U, P>
where
    U: UserQuery,
    P: ProfileRepository,
{
    pub fn new(users: U, profiles: P) -> Self {
        Self { users, profiles }
    }
}

fn map_repo_error(err: ProfileRepositoryError) -> UpdateProfileError {
    match err {
        ProfileRepositoryError::NotFound => UpdateProfileError::UserNotFound,
        other => UpdateProfileError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<U, P> UpdateProfileUseCase for UpdateProfileService<U, P>
where
    U: UserQuery,
    P: ProfileRepository,
{
    async fn execute(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<ProfileView, UpdateProfileError> {
        let target = command.target();

        let user = self
            .users
            .find_by_id(target)
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
            .ok_or(UpdateProfileError::UserNotFound)?;

        if command.actor() != target {
            return Err(UpdateProfileError::Forbidden);
        }

        // The row may not exist yet for accounts that never opened their profile.
        self.profiles
            .get_or_create(target)
            .await
            .map_err(map_repo_error)?;

        let updated = self
            .profiles
            .update(target, command.into_changes())
            .await
            .map_err(map_repo_error)?;

        Ok(ProfileView::new(updated, UserView::from(&user)))
    }
}
