use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// `likes` and `shares` share one shape: a (user, post) pair that may
/// exist at most once.
fn reaction_table<T: Iden + Copy + 'static>(
    table: T,
    id: T,
    user_id: T,
    post_id: T,
    created_at: T,
    name: &str,
) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(ColumnDef::new(id).uuid().not_null().primary_key())
        .col(ColumnDef::new(user_id).uuid().not_null())
        .col(ColumnDef::new(post_id).uuid().not_null())
        .col(
            ColumnDef::new(created_at)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{name}_user_id"))
                .from(table, user_id)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{name}_post_id"))
                .from(table, post_id)
                .to(Posts::Table, Posts::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(reaction_table(
                Likes::Table,
                Likes::Id,
                Likes::UserId,
                Likes::PostId,
                Likes::CreatedAt,
                "likes",
            ))
            .await?;

        manager
            .create_table(reaction_table(
                Shares::Table,
                Shares::Id,
                Shares::UserId,
                Shares::PostId,
                Shares::CreatedAt,
                "shares",
            ))
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // The unique pair turns a concurrent double toggle into a
        // constraint error the repository recognises.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_likes_pair
                ON likes (user_id, post_id);
                CREATE UNIQUE INDEX IF NOT EXISTS idx_shares_pair
                ON shares (user_id, post_id);
                "#,
            )
            .await?;

        // Per-post counts
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_likes_post_id
                ON likes (post_id);
                CREATE INDEX IF NOT EXISTS idx_shares_post_id
                ON shares (post_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_likes_pair;
                DROP INDEX IF EXISTS idx_shares_pair;
                DROP INDEX IF EXISTS idx_likes_post_id;
                DROP INDEX IF EXISTS idx_shares_post_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Shares::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Likes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum Likes {
    Table,
    Id,
    UserId,
    PostId,
    CreatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum Shares {
    Table,
    Id,
    UserId,
    PostId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
