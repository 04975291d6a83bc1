use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::comments::ActiveModel;
use crate::comment::application::ports::outgoing::{
    CommentRecord, CommentRepository, CommentRepositoryError, CreateCommentData,
};

#[derive(Clone, Debug)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn create(
        &self,
        data: CreateCommentData,
    ) -> Result<CommentRecord, CommentRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            post_id: Set(data.post_id),
            user_id: Set(data.user_id.value()),
            content: Set(data.content),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model
            .insert(&*self.db)
            .await
            .map_err(|e| CommentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_record())
    }
}
