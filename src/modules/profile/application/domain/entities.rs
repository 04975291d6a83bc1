use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserView;
use crate::profile::application::ports::outgoing::ProfileRecord;

pub const MAX_BIO_LENGTH: usize = 500;
pub const MAX_LOCATION_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProfileView {
    pub user: UserView,
    pub bio: String,
    pub location: String,
    pub birth_date: Option<NaiveDate>,
    pub avatar: Option<String>,
    pub cover_photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ProfileView {
    pub fn new(record: ProfileRecord, user: UserView) -> Self {
        Self {
            user,
            bio: record.bio,
            location: record.location,
            birth_date: record.birth_date,
            avatar: record.avatar,
            cover_photo: record.cover_photo,
            created_at: record.created_at,
        }
    }
}
