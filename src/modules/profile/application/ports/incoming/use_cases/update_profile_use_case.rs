use async_trait::async_trait;
use chrono::NaiveDate;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::{
    ProfileView, MAX_BIO_LENGTH, MAX_LOCATION_LENGTH,
};
use crate::profile::application::ports::outgoing::ProfileChanges;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    actor: UserId,
    target: UserId,
    changes: ProfileChanges,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateProfileCommandError {
    #[error("Bio must not exceed 500 characters")]
    BioTooLong,

    #[error("Location must not exceed 100 characters")]
    LocationTooLong,
}

impl UpdateProfileCommand {
    pub fn new(
        actor: UserId,
        target: UserId,
        bio: Option<String>,
        location: Option<String>,
        birth_date: Option<NaiveDate>,
        avatar: Option<String>,
        cover_photo: Option<String>,
    ) -> Result<Self, UpdateProfileCommandError> {
        if bio
            .as_ref()
            .is_some_and(|b| b.chars().count() > MAX_BIO_LENGTH)
        {
            return Err(UpdateProfileCommandError::BioTooLong);
        }

        let location = location.map(|l| l.trim().to_string());
        if location
            .as_ref()
            .is_some_and(|l| l.chars().count() > MAX_LOCATION_LENGTH)
        {
            return Err(UpdateProfileCommandError::LocationTooLong);
        }

        Ok(Self {
            actor,
            target,
            changes: ProfileChanges {
                bio,
                location,
                birth_date,
                avatar,
                cover_photo,
            },
        })
    }

    pub fn actor(&self) -> UserId {
        self.actor
    }

    pub fn target(&self) -> UserId {
        self.target
    }

    pub fn changes(&self) -> &ProfileChanges {
        &self.changes
    }

    pub fn into_changes(self) -> ProfileChanges {
        self.changes
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("You do not have permission to edit this profile")]
    Forbidden,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProfileCommand)
        -> Result<ProfileView, UpdateProfileError>;
}
