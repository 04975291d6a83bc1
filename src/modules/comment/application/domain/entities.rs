use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserView;
use crate::comment::application::ports::outgoing::CommentRecord;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CommentView {
    pub id: Uuid,
    pub user: UserView,
    #[schema(example = "nice post")]
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CommentView {
    pub fn new(record: CommentRecord, user: UserView) -> Self {
        Self {
            id: record.id,
            user,
            content: record.content,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
