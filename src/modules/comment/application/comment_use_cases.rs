use std::sync::Arc;

use crate::comment::application::ports::incoming::use_cases::{
    CreateCommentUseCase, ListCommentsUseCase,
};

#[derive(Clone)]
pub struct CommentUseCases {
    pub list: Arc<dyn ListCommentsUseCase>,
    pub create: Arc<dyn CreateCommentUseCase>,
}
