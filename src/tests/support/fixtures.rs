//! Ready-made views for handler tests.

use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserView};
use crate::comment::application::domain::entities::CommentView;
use crate::post::application::domain::entities::{PostType, PostView};
use crate::profile::application::domain::entities::ProfileView;

pub fn user_view(id: UserId, username: &str) -> UserView {
    UserView {
        id: id.value(),
        username: username.to_string(),
        email: format!("{username}@x.com"),
        first_name: String::new(),
        last_name: String::new(),
        date_joined: Utc::now(),
    }
}

pub fn profile_view(user: UserView) -> ProfileView {
    ProfileView {
        user,
        bio: String::new(),
        location: String::new(),
        birth_date: None,
        avatar: None,
        cover_photo: None,
        created_at: Utc::now(),
    }
}

pub fn comment_view(author: UserView, content: &str) -> CommentView {
    CommentView {
        id: Uuid::new_v4(),
        user: author,
        content: content.to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn post_view(id: Uuid, author: UserView, content: &str) -> PostView {
    PostView {
        id,
        author,
        content: content.to_string(),
        image: None,
        post_type: PostType::Text,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        likes_count: 0,
        comments_count: 0,
        shares_count: 0,
        comments: vec![],
        is_liked: false,
        is_shared: false,
    }
}
