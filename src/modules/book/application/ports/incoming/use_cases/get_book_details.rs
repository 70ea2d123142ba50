use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::book::application::ports::outgoing::BookView;
use crate::modules::review::application::ports::outgoing::ReviewWithReviewer;
use crate::shared::pagination::PageRequest;

pub const DEFAULT_REVIEWS_PAGE_LIMIT: u64 = 5;

/// A book, its rating summary, and one page of its reviews.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetails {
    #[serde(flatten)]
    pub book: BookView,
    pub average_rating: f64,
    pub total_reviews: u64,
    pub reviews: Vec<ReviewWithReviewer>,
    pub current_page: u64,
    /// Review page size actually applied, after capping.
    pub limit: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetBookDetailsError {
    #[error("Book not found.")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetBookDetailsUseCase: Send + Sync {
    async fn execute(
        &self,
        book_id: Uuid,
        page: PageRequest,
    ) -> Result<BookDetails, GetBookDetailsError>;
}
