use std::collections::HashMap;

use crate::auth::application::domain::entities::{UserId, UserView};
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserLookupError {
    #[error("User {0} referenced but missing")]
    Missing(UserId),

    #[error(transparent)]
    Query(#[from] UserQueryError),
}

/// Resolves user ids to views, hitting the query port once per distinct id.
/// Lives for a single request.
pub struct UserViewCache<'a, U: UserQuery + ?Sized> {
    users: &'a U,
    seen: HashMap<UserId, UserView>,
}

impl<'a, U: UserQuery + ?Sized> UserViewCache<'a, U> {
    pub fn new(users: &'a U) -> Self {
        Self {
            users,
            seen: HashMap::new(),
        }
    }

    pub async fn get(&mut self, user_id: UserId) -> Result<UserView, UserLookupError> {
        if let Some(view) = self.seen.get(&user_id) {
            return Ok(view.clone());
        }

        let record = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(UserLookupError::Missing(user_id))?;

        let view = UserView::from(&record);
        self.seen.insert(user_id, view.clone());
        Ok(view)
    }
}
