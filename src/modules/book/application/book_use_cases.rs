use std::sync::Arc;

use crate::modules::book::application::ports::incoming::use_cases::{
    CreateBookUseCase, GetBookDetailsUseCase, GetBooksUseCase, SearchBooksUseCase,
};

#[derive(Clone)]
pub struct BookUseCases {
    pub create: Arc<dyn CreateBookUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetBooksUseCase + Send + Sync>,
    pub search: Arc<dyn SearchBooksUseCase + Send + Sync>,
    pub get_details: Arc<dyn GetBookDetailsUseCase + Send + Sync>,
}
