mod fetch_current_user_use_case;
mod login_user_use_case;
mod logout_user_use_case;
mod register_user_use_case;

pub use fetch_current_user_use_case::{FetchCurrentUserError, FetchCurrentUserUseCase};
pub use login_user_use_case::{LoginCommand, LoginCommandError, LoginError, LoginUserUseCase};
pub use logout_user_use_case::{LogoutError, LogoutUserUseCase};
pub use register_user_use_case::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError, RegisterUserUseCase,
};
