mod follow_user;

pub use follow_user::*;
