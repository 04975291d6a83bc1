use std::sync::Arc;

use crate::profile::application::ports::incoming::use_cases::{
    GetProfileUseCase, UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get: Arc<dyn GetProfileUseCase>,
    pub update: Arc<dyn UpdateProfileUseCase>,
}
