pub mod reaction_query_postgres;
pub mod reaction_repository_postgres;
pub mod sea_orm_entity;

pub use reaction_query_postgres::ReactionQueryPostgres;
pub use reaction_repository_postgres::ReactionRepositoryPostgres;
