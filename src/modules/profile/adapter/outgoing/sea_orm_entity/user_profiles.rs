use sea_orm::entity::prelude::*;
use sea_orm::Set;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::ports::outgoing::ProfileRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub bio: String,
    pub location: String,
    pub birth_date: Option<Date>,
    pub avatar: Option<String>,
    pub cover_photo: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(self) -> ProfileRecord {
        ProfileRecord {
            user_id: UserId::from(self.user_id),
            bio: self.bio,
            location: self.location,
            birth_date: self.birth_date,
            avatar: self.avatar,
            cover_photo: self.cover_photo,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

/// The row every user starts with, and the record it reads back as.
pub fn blank_row(user_id: UserId) -> (ActiveModel, ProfileRecord) {
    let now = chrono::Utc::now();
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

    let active = ActiveModel {
        user_id: Set(user_id.value()),
        bio: Set(String::new()),
        location: Set(String::new()),
        birth_date: Set(None),
        avatar: Set(None),
        cover_photo: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };

    (active, record)
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
