use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Select};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::comments::{Column, Entity, Model};
use crate::comment::application::ports::outgoing::{CommentQuery, CommentQueryError, CommentRecord};

#[derive(Clone, Debug)]
pub struct CommentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Oldest first; ids break timestamp ties.
fn comments_for_post(post_id: Uuid) -> Select<Entity> {
    Entity::find()
        .filter(Column::PostId.eq(post_id))
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
}

fn map_db_err(e: DbErr) -> CommentQueryError {
    CommentQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CommentQuery for CommentQueryPostgres {
    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<CommentRecord>, CommentQueryError> {
        let rows = comments_for_post(post_id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Model::to_record).collect())
    }
}
