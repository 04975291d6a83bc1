mod toggle_follow_use_case;

pub use toggle_follow_use_case::{ToggleFollowError, ToggleFollowUseCase};
