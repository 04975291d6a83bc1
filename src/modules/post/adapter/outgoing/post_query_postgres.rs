use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Select,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::posts::{Column, Entity, Model};
use crate::post::application::ports::outgoing::{PostFilter, PostQuery, PostQueryError, PostRecord};

#[derive(Clone, Debug)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Newest first; ids break timestamp ties so equal timestamps keep a stable order.
fn posts_matching(filter: PostFilter) -> Select<Entity> {
    let query = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id);

    match filter {
        PostFilter::All => query,
        PostFilter::ByAuthor(author) => query.filter(Column::AuthorId.eq(author.value())),
        PostFilter::Latest(limit) => query.limit(limit),
    }
}

fn map_db_err(e: DbErr) -> PostQueryError {
    PostQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn list(&self, filter: PostFilter) -> Result<Vec<PostRecord>, PostQueryError> {
        let rows = posts_matching(filter)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Model::to_record).collect())
    }

    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<PostRecord>, PostQueryError> {
        let row = Entity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Model::to_record))
    }
}
