use std::sync::Arc;

use crate::modules::review::application::ports::incoming::use_cases::{
    AddReviewUseCase, DeleteReviewUseCase, UpdateReviewUseCase,
};

#[derive(Clone)]
pub struct ReviewUseCases {
    pub add: Arc<dyn AddReviewUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateReviewUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteReviewUseCase + Send + Sync>,
}
