use async_trait::async_trait;
use rand::{distributions::Alphanumeric, Rng};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use tracing::debug;

use super::sea_orm_entity::auth_tokens::{
    ActiveModel as TokenActiveModel, Column as TokenColumn, Entity as TokenEntity,
};
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{TokenRepository, TokenRepositoryError};
use crate::shared::db::is_unique_violation;

pub const TOKEN_KEY_LENGTH: usize = 40;

fn generate_key() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_KEY_LENGTH)
        .map(char::from)
        .collect()
}

/// A freshly keyed token row for `user_id`.
pub(crate) fn new_token_row(user_id: UserId) -> (TokenActiveModel, String) {
    let key = generate_key();
    let active = TokenActiveModel {
        key: Set(key.clone()),
        user_id: Set(user_id.value()),
        created_at: Set(chrono::Utc::now().into()),
    };
    (active, key)
}

#[derive(Clone, Debug)]
pub struct TokenRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TokenRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_key(&self, user_id: UserId) -> Result<Option<String>, TokenRepositoryError> {
        let row = TokenEntity::find()
            .filter(TokenColumn::UserId.eq(user_id.value()))
            .one(&*self.db)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(|t| t.key))
    }
}

#[async_trait]
impl TokenRepository for TokenRepositoryPostgres {
    async fn get_or_create(&self, user_id: UserId) -> Result<String, TokenRepositoryError> {
        if let Some(key) = self.find_key(user_id).await? {
            return Ok(key);
        }

        let (active, key) = new_token_row(user_id);

        match TokenEntity::insert(active)
            .exec_without_returning(&*self.db)
            .await
        {
            Ok(_) => Ok(key),
            Err(e) if is_unique_violation(&e) => {
                // A concurrent login issued the user's token first.
                debug!(%user_id, "token insert raced, reusing existing key");
                self.find_key(user_id).await?.ok_or_else(|| {
                    TokenRepositoryError::DatabaseError(
                        "token vanished after unique violation".to_string(),
                    )
                })
            }
            Err(e) => Err(TokenRepositoryError::DatabaseError(e.to_string())),
        }
    }

    async fn find_user_by_key(&self, key: &str) -> Result<Option<UserId>, TokenRepositoryError> {
        let row = TokenEntity::find_by_id(key.to_string())
            .one(&*self.db)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(|t| UserId::from(t.user_id)))
    }

    async fn delete_for_user(&self, user_id: UserId) -> Result<bool, TokenRepositoryError> {
        let result = TokenEntity::delete_many()
            .filter(TokenColumn::UserId.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}
