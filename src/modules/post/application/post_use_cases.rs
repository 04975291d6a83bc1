use std::sync::Arc;

use crate::post::application::ports::incoming::use_cases::{
    CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase, UpdatePostUseCase,
};

#[derive(Clone)]
pub struct PostUseCases {
    pub list: Arc<dyn ListPostsUseCase>,
    pub get: Arc<dyn GetPostUseCase>,
    pub create: Arc<dyn CreatePostUseCase>,
    pub update: Arc<dyn UpdatePostUseCase>,
    pub delete: Arc<dyn DeletePostUseCase>,
}
