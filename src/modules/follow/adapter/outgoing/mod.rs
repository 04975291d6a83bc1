pub mod follow_query_postgres;
pub mod follow_repository_postgres;
pub mod sea_orm_entity;

pub use follow_query_postgres::FollowQueryPostgres;
pub use follow_repository_postgres::FollowRepositoryPostgres;
