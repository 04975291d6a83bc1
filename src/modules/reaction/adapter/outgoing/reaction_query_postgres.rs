use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::with_reaction_table;
use crate::auth::application::domain::entities::UserId;
use crate::reaction::application::{
    domain::entities::ReactionKind,
    ports::outgoing::{ReactionQuery, ReactionQueryError},
};

#[derive(Clone, Debug)]
pub struct ReactionQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReactionQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ReactionQueryError {
    ReactionQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ReactionQuery for ReactionQueryPostgres {
    async fn exists(
        &self,
        kind: ReactionKind,
        user_id: UserId,
        post_id: Uuid,
    ) -> Result<bool, ReactionQueryError> {
        let matching = with_reaction_table!(kind, table => {
            table::Entity::find()
                .filter(table::Column::UserId.eq(user_id.value()))
                .filter(table::Column::PostId.eq(post_id))
                .count(&*self.db)
                .await
        })
        .map_err(map_db_err)?;

        Ok(matching > 0)
    }

    async fn count(&self, kind: ReactionKind, post_id: Uuid) -> Result<u64, ReactionQueryError> {
        with_reaction_table!(kind, table => {
            table::Entity::find()
                .filter(table::Column::PostId.eq(post_id))
                .count(&*self.db)
                .await
        })
        .map_err(map_db_err)
    }
}
