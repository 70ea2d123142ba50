use async_trait::async_trait;
use tracing::info;

use crate::modules::book::application::ports::incoming::use_cases::{
    CreateBookCommand, CreateBookError, CreateBookUseCase,
};
use crate::modules::book::application::ports::outgoing::{
    BookRepository, BookRepositoryError, BookView,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateBookService<R>
where
    R: BookRepository,
{
    book_repository: R,
}

impl<R> CreateBookService<R>
where
    R: BookRepository,
{
    pub fn new(book_repository: R) -> Self {
        Self { book_repository }
    }
}

#[async_trait]
impl<R> CreateBookUseCase for CreateBookService<R>
where
    R: BookRepository + Send + Sync,
{
    async fn execute(&self, command: CreateBookCommand) -> Result<BookView, CreateBookError> {
        let book = self
            .book_repository
            .create_book(command.into_data())
            .await
            .map_err(|e| match e {
                BookRepositoryError::CreatorNotFound => CreateBookError::CreatorNotFound,
                BookRepositoryError::DatabaseError(msg) => CreateBookError::RepositoryError(msg),
            })?;

        info!(book_id = %book.id, created_by = %book.created_by, "Book created");

        Ok(book)
    }
}
