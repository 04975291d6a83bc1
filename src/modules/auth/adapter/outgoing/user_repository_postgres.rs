use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::auth_tokens::Entity as TokenEntity;
use super::sea_orm_entity::users::ActiveModel as UserActiveModel;
use super::token_repository_postgres::new_token_row;
use crate::auth::application::ports::outgoing::{
    CreateUserData, NewAccount, UserRepository, UserRepositoryError,
};
use crate::profile::adapter::outgoing::sea_orm_entity::user_profiles::{
    self, Entity as ProfileEntity,
};
use crate::shared::db::is_unique_violation;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn insert_account(
        txn: &DatabaseTransaction,
        data: CreateUserData,
    ) -> Result<NewAccount, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            date_joined: Set(chrono::Utc::now().into()),
        };

        let user = active_user
            .insert(txn)
            .await
            .map_err(map_insert_error)?
            .to_record();

        let (profile_row, profile) = user_profiles::blank_row(user.id);
        ProfileEntity::insert(profile_row)
            .exec_without_returning(txn)
            .await
            .map_err(map_db_err)?;

        let (token_row, token) = new_token_row(user.id);
        TokenEntity::insert(token_row)
            .exec_without_returning(txn)
            .await
            .map_err(map_db_err)?;

        Ok(NewAccount {
            user,
            profile,
            token,
        })
    }
}

fn map_db_err(err: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(err.to_string())
}

/// Attributes a unique violation to the column whose index rejected the row.
fn map_insert_error(err: DbErr) -> UserRepositoryError {
    if !is_unique_violation(&err) {
        return map_db_err(err);
    }

    let message = err.to_string().to_lowercase();
    if message.contains("username") {
        UserRepositoryError::UsernameTaken
    } else if message.contains("email") {
        UserRepositoryError::EmailTaken
    } else {
        UserRepositoryError::UserAlreadyExists
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_account(&self, data: CreateUserData) -> Result<NewAccount, UserRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match Self::insert_account(&txn, data).await {
            Ok(account) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(account)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }
}
