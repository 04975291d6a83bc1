mod fetch_current_user_service;
mod login_user_service;
mod logout_user_service;
mod register_user_service;
mod user_view_cache;

pub use fetch_current_user_service::FetchCurrentUserService;
pub use login_user_service::LoginUserService;
pub use logout_user_service::LogoutUserService;
pub use register_user_service::RegisterUserService;
pub use user_view_cache::{UserLookupError, UserViewCache};
