//! In-memory implementations of the outgoing ports, shared by service tests.
//!
//! Every fake is cheap to clone and clones share storage, so one instance
//! can be handed to several services and inspected afterwards.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    CreateUserData, HashError, NewAccount, PasswordHasher, TokenRepository, TokenRepositoryError,
    UserQuery, UserQueryError, UserRecord, UserRepository, UserRepositoryError,
};
use crate::comment::application::ports::outgoing::{
    CommentQuery, CommentQueryError, CommentRecord, CommentRepository, CommentRepositoryError,
    CreateCommentData,
};
use crate::follow::application::ports::outgoing::{
    FollowQuery, FollowQueryError, FollowRepository, FollowRepositoryError,
};
use crate::post::application::ports::outgoing::{
    CreatePostData, PostChanges, PostFilter, PostQuery, PostQueryError, PostRecord,
    PostRepository, PostRepositoryError,
};
use crate::profile::application::ports::outgoing::{
    ProfileChanges, ProfileRecord, ProfileRepository, ProfileRepositoryError,
};
use crate::reaction::application::domain::entities::ReactionKind;
use crate::reaction::application::ports::outgoing::{
    ReactionQuery, ReactionQueryError, ReactionRepository, ReactionRepositoryError,
};

pub const DB_DOWN: &str = "db down";

pub fn user_record(username: &str) -> UserRecord {
    UserRecord {
        id: UserId::from(Uuid::new_v4()),
        username: username.to_string(),
        email: format!("{username}@x.com"),
        password_hash: format!("hashed:{username}-pw"),
        first_name: String::new(),
        last_name: String::new(),
        date_joined: Utc::now(),
    }
}

// ──────────────────────────────────────────────────────────
// Users
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryUsers {
    rows: Arc<Mutex<Vec<UserRecord>>>,
    fail: bool,
    /// Simulates another request inserting the same username between the
    /// pre-check and the insert.
    race_on_insert: Option<UserRepositoryError>,
    /// Fails after the user row is built, as a profile or token insert would.
    account_setup_fails: bool,
    tokens: Arc<Mutex<Vec<(String, UserId)>>>,
}

impl InMemoryUsers {
    pub fn with(users: Vec<UserRecord>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(users)),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn racing(err: UserRepositoryError) -> Self {
        Self {
            race_on_insert: Some(err),
            ..Default::default()
        }
    }

    pub fn failing_account_setup() -> Self {
        Self {
            account_setup_fails: true,
            ..Default::default()
        }
    }

    pub fn token_for(&self, user_id: UserId) -> Option<String> {
        self.tokens
            .lock()
            .unwrap()
            .iter()
            .find(|(_, u)| *u == user_id)
            .map(|(k, _)| k.clone())
    }

    pub fn all(&self) -> Vec<UserRecord> {
        self.rows.lock().unwrap().clone()
    }

    fn find(&self, pred: impl Fn(&UserRecord) -> bool) -> Result<Option<UserRecord>, UserQueryError> {
        if self.fail {
            return Err(UserQueryError::DatabaseError(DB_DOWN.into()));
        }
        Ok(self.rows.lock().unwrap().iter().find(|u| pred(u)).cloned())
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserRecord>, UserQueryError> {
        self.find(|u| u.id == user_id)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, UserQueryError> {
        self.find(|u| u.username == username)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, UserQueryError> {
        self.find(|u| u.email == email)
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_account(&self, data: CreateUserData) -> Result<NewAccount, UserRepositoryError> {
        if self.fail {
            return Err(UserRepositoryError::DatabaseError(DB_DOWN.into()));
        }
        if let Some(err) = self.race_on_insert.clone() {
            return Err(err);
        }

        let now = Utc::now();
        let user = UserRecord {
            id: UserId::from(Uuid::new_v4()),
            username: data.username,
            email: data.email,
            password_hash: data.password_hash,
            first_name: data.first_name,
            last_name: data.last_name,
            date_joined: now,
        };

        // Rolled back: nothing below is stored.
        if self.account_setup_fails {
            return Err(UserRepositoryError::DatabaseError(DB_DOWN.into()));
        }

        let token = Uuid::new_v4().simple().to_string();
        self.rows.lock().unwrap().push(user.clone());
        self.tokens.lock().unwrap().push((token.clone(), user.id));

        Ok(NewAccount {
            profile: ProfileRecord {
                user_id: user.id,
                bio: String::new(),
                location: String::new(),
                birth_date: None,
                avatar: None,
                cover_photo: None,
                created_at: now,
                updated_at: now,
            },
            user,
            token,
        })
    }
}

// ──────────────────────────────────────────────────────────
// Password hasher
// ──────────────────────────────────────────────────────────

/// Deterministic stand-in: `hash("pw") == "hashed:pw"`.
#[derive(Clone, Default)]
pub struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

// ──────────────────────────────────────────────────────────
// Tokens
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryTokens {
    rows: Arc<Mutex<Vec<(String, UserId)>>>,
    fail: bool,
}

impl InMemoryTokens {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn key_for(&self, user_id: UserId) -> Option<String> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|(_, u)| *u == user_id)
            .map(|(k, _)| k.clone())
    }

    fn check(&self) -> Result<(), TokenRepositoryError> {
        if self.fail {
            return Err(TokenRepositoryError::DatabaseError(DB_DOWN.into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokens {
    async fn get_or_create(&self, user_id: UserId) -> Result<String, TokenRepositoryError> {
        self.check()?;
        if let Some(key) = self.key_for(user_id) {
            return Ok(key);
        }
        let key = Uuid::new_v4().simple().to_string();
        self.rows.lock().unwrap().push((key.clone(), user_id));
        Ok(key)
    }

    async fn find_user_by_key(&self, key: &str) -> Result<Option<UserId>, TokenRepositoryError> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, u)| *u))
    }

    async fn delete_for_user(&self, user_id: UserId) -> Result<bool, TokenRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|(_, u)| *u != user_id);
        Ok(rows.len() != before)
    }
}

// ──────────────────────────────────────────────────────────
// Profiles
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryProfiles {
    rows: Arc<Mutex<Vec<ProfileRecord>>>,
    fail: bool,
}

impl InMemoryProfiles {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn get_or_create(&self, user_id: UserId) -> Result<ProfileRecord, ProfileRepositoryError> {
        if self.fail {
            return Err(ProfileRepositoryError::DatabaseError(DB_DOWN.into()));
        }
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows.iter().find(|p| p.user_id == user_id) {
            return Ok(existing.clone());
        }
        let now = Utc::now();
        let record = ProfileRecord {
            user_id,
            bio: String::new(),
            location: String::new(),
            birth_date: None,
            avatar: None,
            cover_photo: None,
            created_at: now,
            updated_at: now,
        };
        rows.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<ProfileRecord, ProfileRepositoryError> {
        if self.fail {
            return Err(ProfileRepositoryError::DatabaseError(DB_DOWN.into()));
        }
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|p| p.user_id == user_id)
            .ok_or(ProfileRepositoryError::NotFound)?;

        if let Some(bio) = changes.bio {
            row.bio = bio;
        }
        if let Some(location) = changes.location {
            row.location = location;
        }
        if changes.birth_date.is_some() {
            row.birth_date = changes.birth_date;
        }
        if changes.avatar.is_some() {
            row.avatar = changes.avatar;
        }
        if changes.cover_photo.is_some() {
            row.cover_photo = changes.cover_photo;
        }
        row.updated_at = Utc::now();
        Ok(row.clone())
    }
}

// ──────────────────────────────────────────────────────────
// Posts
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryPosts {
    rows: Arc<Mutex<Vec<PostRecord>>>,
    fail: bool,
}

impl InMemoryPosts {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Seeds a post whose `created_at` is `age_secs` in the past.
    pub fn seed(&self, author_id: UserId, content: &str, age_secs: i64) -> PostRecord {
        let at = Utc::now() - Duration::seconds(age_secs);
        let record = PostRecord {
            id: Uuid::new_v4(),
            author_id,
            content: content.to_string(),
            image: None,
            post_type: Default::default(),
            created_at: at,
            updated_at: at,
        };
        self.rows.lock().unwrap().push(record.clone());
        record
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl PostQuery for InMemoryPosts {
    async fn list(&self, filter: PostFilter) -> Result<Vec<PostRecord>, PostQueryError> {
        if self.fail {
            return Err(PostQueryError::DatabaseError(DB_DOWN.into()));
        }
        let mut rows: Vec<PostRecord> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| match filter {
                PostFilter::ByAuthor(author) => p.author_id == author,
                _ => true,
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let PostFilter::Latest(n) = filter {
            rows.truncate(n as usize);
        }
        Ok(rows)
    }

    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<PostRecord>, PostQueryError> {
        if self.fail {
            return Err(PostQueryError::DatabaseError(DB_DOWN.into()));
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == post_id)
            .cloned())
    }
}

#[async_trait]
impl PostRepository for InMemoryPosts {
    async fn create(&self, data: CreatePostData) -> Result<PostRecord, PostRepositoryError> {
        if self.fail {
            return Err(PostRepositoryError::DatabaseError(DB_DOWN.into()));
        }
        let now = Utc::now();
        let record = PostRecord {
            id: Uuid::new_v4(),
            author_id: data.author_id,
            content: data.content,
            image: data.image,
            post_type: data.post_type,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        post_id: Uuid,
        changes: PostChanges,
    ) -> Result<PostRecord, PostRepositoryError> {
        if self.fail {
            return Err(PostRepositoryError::DatabaseError(DB_DOWN.into()));
        }
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(PostRepositoryError::NotFound)?;

        if let Some(content) = changes.content {
            row.content = content;
        }
        if changes.image.is_some() {
            row.image = changes.image;
        }
        if let Some(post_type) = changes.post_type {
            row.post_type = post_type;
        }
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        if self.fail {
            return Err(PostRepositoryError::DatabaseError(DB_DOWN.into()));
        }
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != post_id);
        if rows.len() == before {
            return Err(PostRepositoryError::NotFound);
        }
        Ok(())
    }
}

// ──────────────────────────────────────────────────────────
// Comments
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryComments {
    rows: Arc<Mutex<Vec<CommentRecord>>>,
    fail: bool,
}

impl InMemoryComments {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn seed(&self, post_id: Uuid, user_id: UserId, content: &str, age_secs: i64) {
        let at = Utc::now() - Duration::seconds(age_secs);
        self.rows.lock().unwrap().push(CommentRecord {
            id: Uuid::new_v4(),
            post_id,
            user_id,
            content: content.to_string(),
            created_at: at,
            updated_at: at,
        });
    }
}

#[async_trait]
impl CommentQuery for InMemoryComments {
    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<CommentRecord>, CommentQueryError> {
        if self.fail {
            return Err(CommentQueryError::DatabaseError(DB_DOWN.into()));
        }
        let mut rows: Vec<CommentRecord> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(rows)
    }
}

#[async_trait]
impl CommentRepository for InMemoryComments {
    async fn create(
        &self,
        data: CreateCommentData,
    ) -> Result<CommentRecord, CommentRepositoryError> {
        if self.fail {
            return Err(CommentRepositoryError::DatabaseError(DB_DOWN.into()));
        }
        let now = Utc::now();
        let record = CommentRecord {
            id: Uuid::new_v4(),
            post_id: data.post_id,
            user_id: data.user_id,
            content: data.content,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }
}

// ──────────────────────────────────────────────────────────
// Reactions
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryReactions {
    rows: Arc<Mutex<HashSet<(ReactionKind, UserId, Uuid)>>>,
    fail: bool,
    /// Another request inserts the same row just before ours does.
    race_on_insert: bool,
}

impl InMemoryReactions {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn racing() -> Self {
        Self {
            race_on_insert: true,
            ..Default::default()
        }
    }

    pub fn seed(&self, kind: ReactionKind, user_id: UserId, post_id: Uuid) {
        self.rows.lock().unwrap().insert((kind, user_id, post_id));
    }
}

#[async_trait]
impl ReactionQuery for InMemoryReactions {
    async fn exists(
        &self,
        kind: ReactionKind,
        user_id: UserId,
        post_id: Uuid,
    ) -> Result<bool, ReactionQueryError> {
        if self.fail {
            return Err(ReactionQueryError::DatabaseError(DB_DOWN.into()));
        }
        Ok(self.rows.lock().unwrap().contains(&(kind, user_id, post_id)))
    }

    async fn count(&self, kind: ReactionKind, post_id: Uuid) -> Result<u64, ReactionQueryError> {
        if self.fail {
            return Err(ReactionQueryError::DatabaseError(DB_DOWN.into()));
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _, p)| *k == kind && *p == post_id)
            .count() as u64)
    }
}

#[async_trait]
impl ReactionRepository for InMemoryReactions {
    async fn insert(
        &self,
        kind: ReactionKind,
        user_id: UserId,
        post_id: Uuid,
    ) -> Result<(), ReactionRepositoryError> {
        if self.fail {
            return Err(ReactionRepositoryError::DatabaseError(DB_DOWN.into()));
        }
        let mut rows = self.rows.lock().unwrap();
        if self.race_on_insert {
            rows.insert((kind, user_id, post_id));
        }
        if !rows.insert((kind, user_id, post_id)) {
            return Err(ReactionRepositoryError::AlreadyExists);
        }
        Ok(())
    }

    async fn delete(
        &self,
        kind: ReactionKind,
        user_id: UserId,
        post_id: Uuid,
    ) -> Result<bool, ReactionRepositoryError> {
        if self.fail {
            return Err(ReactionRepositoryError::DatabaseError(DB_DOWN.into()));
        }
        Ok(self.rows.lock().unwrap().remove(&(kind, user_id, post_id)))
    }
}

// ──────────────────────────────────────────────────────────
// Follows
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryFollows {
    rows: Arc<Mutex<HashSet<(UserId, UserId)>>>,
    race_on_insert: bool,
}

impl InMemoryFollows {
    pub fn racing() -> Self {
        Self {
            race_on_insert: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl FollowQuery for InMemoryFollows {
    async fn exists(&self, follower: UserId, followee: UserId) -> Result<bool, FollowQueryError> {
        Ok(self.rows.lock().unwrap().contains(&(follower, followee)))
    }

    async fn count_followers(&self, user_id: UserId) -> Result<u64, FollowQueryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, followee)| *followee == user_id)
            .count() as u64)
    }
}

#[async_trait]
impl FollowRepository for InMemoryFollows {
    async fn insert(&self, follower: UserId, followee: UserId) -> Result<(), FollowRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if self.race_on_insert {
            rows.insert((follower, followee));
        }
        if !rows.insert((follower, followee)) {
            return Err(FollowRepositoryError::AlreadyExists);
        }
        Ok(())
    }

    async fn delete(&self, follower: UserId, followee: UserId) -> Result<bool, FollowRepositoryError> {
        Ok(self.rows.lock().unwrap().remove(&(follower, followee)))
    }
}
