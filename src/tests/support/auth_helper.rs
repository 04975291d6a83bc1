use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{TokenRepository, TokenRepositoryError};

pub const TEST_TOKEN: &str = "test-token";

const TEST_USER_UUID: Uuid = Uuid::from_u128(0x5eed_0000_0000_4000_8000_0000_0000_0001);

/// The caller that `TEST_TOKEN` authenticates.
pub fn test_user_id() -> UserId {
    UserId::from(TEST_USER_UUID)
}

pub fn auth_header() -> (&'static str, String) {
    ("Authorization", format!("Token {TEST_TOKEN}"))
}

/// Knows exactly one key, `TEST_TOKEN`.
#[derive(Clone, Default)]
pub struct StubTokenStore;

#[async_trait]
impl TokenRepository for StubTokenStore {
    async fn get_or_create(&self, _user_id: UserId) -> Result<String, TokenRepositoryError> {
        Ok(TEST_TOKEN.to_string())
    }

    async fn find_user_by_key(&self, key: &str) -> Result<Option<UserId>, TokenRepositoryError> {
        Ok((key == TEST_TOKEN).then(test_user_id))
    }

    async fn delete_for_user(&self, _user_id: UserId) -> Result<bool, TokenRepositoryError> {
        Ok(true)
    }
}

pub fn token_store() -> web::Data<Arc<dyn TokenRepository>> {
    let store: Arc<dyn TokenRepository> = Arc::new(StubTokenStore);
    web::Data::new(store)
}
