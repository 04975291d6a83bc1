mod profile_repository;

pub use profile_repository::{
    ProfileChanges, ProfileRecord, ProfileRepository, ProfileRepositoryError,
};
