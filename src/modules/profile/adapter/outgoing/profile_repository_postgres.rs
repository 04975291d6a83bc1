use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use tracing::debug;

use super::sea_orm_entity::user_profiles::{blank_row, ActiveModel, Column, Entity, Model};
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::outgoing::{
    ProfileChanges, ProfileRecord, ProfileRepository, ProfileRepositoryError,
};
use crate::shared::db::is_unique_violation;

#[derive(Clone, Debug)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find(&self, user_id: UserId) -> Result<Option<ProfileRecord>, ProfileRepositoryError> {
        let row = Entity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Model::to_record))
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn get_or_create(
        &self,
        user_id: UserId,
    ) -> Result<ProfileRecord, ProfileRepositoryError> {
        if let Some(existing) = self.find(user_id).await? {
            return Ok(existing);
        }

        let (active, record) = blank_row(user_id);

        match Entity::insert(active).exec_without_returning(&*self.db).await {
            Ok(_) => Ok(record),
            Err(e) if is_unique_violation(&e) => {
                debug!(%user_id, "profile insert raced, loading existing row");
                self.find(user_id).await?.ok_or(ProfileRepositoryError::NotFound)
            }
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn update(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<ProfileRecord, ProfileRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(bio) = changes.bio {
            model.bio = Set(bio);
        }
        if let Some(location) = changes.location {
            model.location = Set(location);
        }
        if let Some(birth_date) = changes.birth_date {
            model.birth_date = Set(Some(birth_date));
        }
        if let Some(avatar) = changes.avatar {
            model.avatar = Set(Some(avatar));
        }
        if let Some(cover_photo) = changes.cover_photo {
            model.cover_photo = Set(Some(cover_photo));
        }
        model.updated_at = Set(Utc::now().into());

        let rows = Entity::update_many()
            .set(model)
            .filter(Column::UserId.eq(user_id.value()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .next()
            .map(Model::to_record)
            .ok_or(ProfileRepositoryError::NotFound)
    }
}
