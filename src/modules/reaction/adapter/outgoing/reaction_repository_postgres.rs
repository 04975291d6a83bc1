use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::with_reaction_table;
use crate::auth::application::domain::entities::UserId;
use crate::reaction::application::{
    domain::entities::ReactionKind,
    ports::outgoing::{ReactionRepository, ReactionRepositoryError},
};
use crate::shared::db::is_unique_violation;

#[derive(Clone, Debug)]
pub struct ReactionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReactionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_insert_error(e: DbErr) -> ReactionRepositoryError {
    if is_unique_violation(&e) {
        ReactionRepositoryError::AlreadyExists
    } else {
        ReactionRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl ReactionRepository for ReactionRepositoryPostgres {
    async fn insert(
        &self,
        kind: ReactionKind,
        user_id: UserId,
        post_id: Uuid,
    ) -> Result<(), ReactionRepositoryError> {
        let now = Utc::now().fixed_offset();

        with_reaction_table!(kind, table => {
            let row = table::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(user_id.value()),
                post_id: Set(post_id),
                created_at: Set(now),
            };
            table::Entity::insert(row)
                .exec_without_returning(&*self.db)
                .await
        })
        .map_err(map_insert_error)?;

        Ok(())
    }

    async fn delete(
        &self,
        kind: ReactionKind,
        user_id: UserId,
        post_id: Uuid,
    ) -> Result<bool, ReactionRepositoryError> {
        let result = with_reaction_table!(kind, table => {
            table::Entity::delete_many()
                .filter(table::Column::UserId.eq(user_id.value()))
                .filter(table::Column::PostId.eq(post_id))
                .exec(&*self.db)
                .await
        })
        .map_err(|e| ReactionRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}
