use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::follows::{ActiveModel, Column, Entity};
use crate::auth::application::domain::entities::UserId;
use crate::follow::application::ports::outgoing::{FollowRepository, FollowRepositoryError};
use crate::shared::db::is_unique_violation;

#[derive(Clone, Debug)]
pub struct FollowRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FollowRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_insert_error(e: DbErr) -> FollowRepositoryError {
    if is_unique_violation(&e) {
        FollowRepositoryError::AlreadyExists
    } else {
        FollowRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl FollowRepository for FollowRepositoryPostgres {
    async fn insert(&self, follower: UserId, followee: UserId) -> Result<(), FollowRepositoryError> {
        let row = ActiveModel {
            id: Set(Uuid::new_v4()),
            follower_id: Set(follower.value()),
            followee_id: Set(followee.value()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        Entity::insert(row)
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_insert_error)?;

        Ok(())
    }

    async fn delete(&self, follower: UserId, followee: UserId) -> Result<bool, FollowRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::FollowerId.eq(follower.value()))
            .filter(Column::FolloweeId.eq(followee.value()))
            .exec(&*self.db)
            .await
            .map_err(|e| FollowRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}
