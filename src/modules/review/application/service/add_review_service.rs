use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::book::application::ports::outgoing::BookQuery;
use crate::modules::review::application::ports::incoming::use_cases::{
    AddReviewCommand, AddReviewError, AddReviewUseCase,
};
use crate::modules::review::application::ports::outgoing::{
    ReviewRepository, ReviewRepositoryError, ReviewResult,
};

/// Creates at most one review per (book, user).
///
/// The `exists_for` pre-check gives the common case a clean error; the
/// unique index on `reviews(book_id, user_id)` settles concurrent inserts.
pub struct AddReviewService<R, B>
where
    R: ReviewRepository,
    B: BookQuery,
{
    review_repository: R,
    book_query: B,
}

impl<R, B> AddReviewService<R, B>
where
    R: ReviewRepository,
    B: BookQuery,
{
    pub fn new(review_repository: R, book_query: B) -> Self {
        Self {
            review_repository,
            book_query,
        }
    }
}

#[async_trait]
impl<R, B> AddReviewUseCase for AddReviewService<R, B>
where
    R: ReviewRepository + Send + Sync,
    B: BookQuery + Send + Sync,
{
    async fn execute(&self, command: AddReviewCommand) -> Result<ReviewResult, AddReviewError> {
        let book_id = command.book_id();
        let user_id = command.user_id();

        let book_exists = self
            .book_query
            .exists(book_id)
            .await
            .map_err(|e| AddReviewError::RepositoryError(e.to_string()))?;
        if !book_exists {
            return Err(AddReviewError::BookNotFound);
        }

        let already_reviewed = self
            .review_repository
            .exists_for(book_id, user_id)
            .await
            .map_err(|e| AddReviewError::RepositoryError(e.to_string()))?;
        if already_reviewed {
            return Err(AddReviewError::AlreadyReviewed);
        }

        let review = self
            .review_repository
            .create_review(command.into_data())
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::AlreadyExists => {
                    warn!(%book_id, %user_id, "Duplicate review rejected by unique index");
                    AddReviewError::AlreadyReviewed
                }
                ReviewRepositoryError::BookNotFound => AddReviewError::BookNotFound,
                other => AddReviewError::RepositoryError(other.to_string()),
            })?;

        info!(review_id = %review.id, %book_id, %user_id, "Review created");

        Ok(review)
    }
}
