use async_trait::async_trait;

use crate::modules::book::application::ports::outgoing::BookView;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchBooksError {
    #[error("Search query is required.")]
    MissingQuery,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Matches `term` against title, author and genre.
#[async_trait]
pub trait SearchBooksUseCase: Send + Sync {
    async fn execute(
        &self,
        term: &str,
        page: PageRequest,
    ) -> Result<PageResult<BookView>, SearchBooksError>;
}
