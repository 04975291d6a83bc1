mod toggle_follow_service;

pub use toggle_follow_service::ToggleFollowService;
