use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::posts::{ActiveModel, Column, Entity, Model};
use crate::post::application::ports::outgoing::{
    CreatePostData, PostChanges, PostRecord, PostRepository, PostRepositoryError,
};

#[derive(Clone, Debug)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> PostRepositoryError {
    PostRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn create(&self, data: CreatePostData) -> Result<PostRecord, PostRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            author_id: Set(data.author_id.value()),
            content: Set(data.content),
            image: Set(data.image),
            post_type: Set(data.post_type.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_record())
    }

    async fn update(
        &self,
        post_id: Uuid,
        changes: PostChanges,
    ) -> Result<PostRecord, PostRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(content) = changes.content {
            model.content = Set(content);
        }
        if let Some(image) = changes.image {
            model.image = Set(Some(image));
        }
        if let Some(post_type) = changes.post_type {
            model.post_type = Set(post_type.as_str().to_string());
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let rows = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(post_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .next()
            .map(Model::to_record)
            .ok_or(PostRepositoryError::NotFound)
    }

    async fn delete(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        let result = Entity::delete_by_id(post_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PostRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::post::application::domain::entities::PostType;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn post_model(id: Uuid, content: &str, post_type: &str) -> Model {
        Model {
            id,
            author_id: Uuid::new_v4(),
            content: content.to_string(),
            image: Some("posts/a.png".to_string()),
            post_type: post_type.to_string(),
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(id, "hello", "mixed")]])
            .into_connection();

        let repo = PostRepositoryPostgres::new(Arc::new(db));
        let record = repo
            .create(CreatePostData {
                author_id: UserId::from(Uuid::new_v4()),
                content: "hello".into(),
                image: Some("posts/a.png".into()),
                post_type: PostType::Mixed,
            })
            .await
            .unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.post_type, PostType::Mixed);
    }

    #[tokio::test]
    async fn test_update_returns_updated_row() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(id, "edited", "text")]])
            .into_connection();

        let repo = PostRepositoryPostgres::new(Arc::new(db));
        let record = repo
            .update(
                id,
                PostChanges {
                    content: Some("edited".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(record.content, "edited");
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let repo = PostRepositoryPostgres::new(Arc::new(db));
        let result = repo.update(Uuid::new_v4(), PostChanges::default()).await;

        assert!(matches!(result, Err(PostRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_reports_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(1), exec(0)])
            .into_connection();

        let repo = PostRepositoryPostgres::new(Arc::new(db));

        assert!(repo.delete(Uuid::new_v4()).await.is_ok());
        assert!(matches!(
            repo.delete(Uuid::new_v4()).await,
            Err(PostRepositoryError::NotFound)
        ));
    }
}
