pub use sea_orm_migration::prelude::*;

mod m20250304_000001_create_users_table;
mod m20250304_000002_create_auth_tokens_table;
mod m20250304_000003_create_user_profiles_table;
mod m20250305_000001_create_posts_table;
mod m20250305_000002_create_comments_table;
mod m20250305_000003_create_reaction_tables;
mod m20250306_000001_create_follows_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_000001_create_users_table::Migration),
            Box::new(m20250304_000002_create_auth_tokens_table::Migration),
            Box::new(m20250304_000003_create_user_profiles_table::Migration),
            Box::new(m20250305_000001_create_posts_table::Migration),
            Box::new(m20250305_000002_create_comments_table::Migration),
            Box::new(m20250305_000003_create_reaction_tables::Migration),
            Box::new(m20250306_000001_create_follows_table::Migration),
        ]
    }
}
