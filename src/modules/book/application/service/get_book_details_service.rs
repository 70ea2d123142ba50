use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::book::application::ports::incoming::use_cases::{
    BookDetails, GetBookDetailsError, GetBookDetailsUseCase,
};
use crate::modules::book::application::ports::outgoing::{BookQuery, BookQueryError};
use crate::modules::review::application::ports::outgoing::ReviewQuery;
use crate::shared::pagination::PageRequest;

/// Joins a book with its rating summary and one page of reviews.
///
/// The summary and the page come from two independent review queries that
/// run concurrently; the summary always covers every review of the book.
pub struct GetBookDetailsService<B, R>
where
    B: BookQuery,
    R: ReviewQuery,
{
    books: B,
    reviews: R,
}

impl<B, R> GetBookDetailsService<B, R>
where
    B: BookQuery,
    R: ReviewQuery,
{
    pub fn new(books: B, reviews: R) -> Self {
        Self { books, reviews }
    }
}

#[async_trait]
impl<B, R> GetBookDetailsUseCase for GetBookDetailsService<B, R>
where
    B: BookQuery + Send + Sync,
    R: ReviewQuery + Send + Sync,
{
    async fn execute(
        &self,
        book_id: Uuid,
        page: PageRequest,
    ) -> Result<BookDetails, GetBookDetailsError> {
        let book = self.books.get_by_id(book_id).await.map_err(|e| match e {
            BookQueryError::NotFound => GetBookDetailsError::NotFound,
            other => GetBookDetailsError::QueryFailed(other.to_string()),
        })?;

        let (stats, reviews) = tokio::try_join!(
            self.reviews.stats_for_book(book_id),
            self.reviews.page_for_book(book_id, page),
        )
        .map_err(|e| GetBookDetailsError::QueryFailed(e.to_string()))?;

        Ok(BookDetails {
            book,
            average_rating: stats.average_rating,
            total_reviews: stats.total_reviews,
            reviews,
            current_page: page.page(),
            limit: page.limit(),
            total_pages: page.total_pages(stats.total_reviews),
        })
    }
}
