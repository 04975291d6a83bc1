use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;

use super::sea_orm_entity::follows::{Column, Entity};
use crate::auth::application::domain::entities::UserId;
use crate::follow::application::ports::outgoing::{FollowQuery, FollowQueryError};

#[derive(Clone, Debug)]
pub struct FollowQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FollowQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> FollowQueryError {
    FollowQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl FollowQuery for FollowQueryPostgres {
    async fn exists(&self, follower: UserId, followee: UserId) -> Result<bool, FollowQueryError> {
        let matching = Entity::find()
            .filter(Column::FollowerId.eq(follower.value()))
            .filter(Column::FolloweeId.eq(followee.value()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(matching > 0)
    }

    async fn count_followers(&self, user_id: UserId) -> Result<u64, FollowQueryError> {
        Entity::find()
            .filter(Column::FolloweeId.eq(user_id.value()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }
}
