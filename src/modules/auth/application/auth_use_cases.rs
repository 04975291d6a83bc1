use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    FetchCurrentUserUseCase, LoginUserUseCase, LogoutUserUseCase, RegisterUserUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase>,
    pub login: Arc<dyn LoginUserUseCase>,
    pub logout: Arc<dyn LogoutUserUseCase>,
    pub current_user: Arc<dyn FetchCurrentUserUseCase>,
}
