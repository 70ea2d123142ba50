use async_trait::async_trait;

use crate::modules::book::application::ports::outgoing::{BookListFilter, BookView};
use crate::shared::pagination::{PageRequest, PageResult};

pub const DEFAULT_BOOKS_PAGE_LIMIT: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetBooksError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetBooksUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: BookListFilter,
        page: PageRequest,
    ) -> Result<PageResult<BookView>, GetBooksError>;
}
