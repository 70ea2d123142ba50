use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::review::application::domain::entities::{
    normalize_comment, InvalidRating, Rating,
};
use crate::modules::review::application::ports::outgoing::{CreateReviewData, ReviewResult};

//
// ──────────────────────────────────────────────────────────
// Add Review Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct AddReviewCommand {
    data: CreateReviewData,
}

impl AddReviewCommand {
    /// A missing rating is rejected like an out-of-range one.
    pub fn new(
        book_id: Uuid,
        user_id: UserId,
        rating: Option<i64>,
        comment: Option<String>,
    ) -> Result<Self, InvalidRating> {
        let rating = Rating::new(rating.ok_or(InvalidRating)?)?;

        Ok(Self {
            data: CreateReviewData {
                book_id,
                user_id,
                rating,
                comment: normalize_comment(comment),
            },
        })
    }

    pub fn book_id(&self) -> Uuid {
        self.data.book_id
    }

    pub fn user_id(&self) -> UserId {
        self.data.user_id
    }

    pub fn into_data(self) -> CreateReviewData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddReviewError {
    #[error("Book not found.")]
    BookNotFound,

    #[error("You have already reviewed this book.")]
    AlreadyReviewed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddReviewUseCase: Send + Sync {
    async fn execute(&self, command: AddReviewCommand) -> Result<ReviewResult, AddReviewError>;
}
