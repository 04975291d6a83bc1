mod reaction_query;
mod reaction_repository;

pub use reaction_query::{ReactionQuery, ReactionQueryError};
pub use reaction_repository::{ReactionRepository, ReactionRepositoryError};
