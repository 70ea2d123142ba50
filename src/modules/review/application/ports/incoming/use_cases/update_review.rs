use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::review::application::domain::entities::{
    normalize_comment, InvalidRating, Rating,
};
use crate::modules::review::application::ports::outgoing::{PatchReviewData, ReviewResult};

#[derive(Debug, Clone)]
pub struct UpdateReviewCommand {
    review_id: Uuid,
    actor: UserId,
    patch: PatchReviewData,
}

impl UpdateReviewCommand {
    /// Omitted fields keep their stored value; a supplied rating is
    /// revalidated.
    pub fn new(
        review_id: Uuid,
        actor: UserId,
        rating: Option<i64>,
        comment: Option<String>,
    ) -> Result<Self, InvalidRating> {
        let rating = rating.map(Rating::new).transpose()?;

        Ok(Self {
            review_id,
            actor,
            patch: PatchReviewData {
                rating,
                comment: normalize_comment(comment),
            },
        })
    }

    pub fn review_id(&self) -> Uuid {
        self.review_id
    }

    pub fn actor(&self) -> UserId {
        self.actor
    }

    pub fn patch(&self) -> &PatchReviewData {
        &self.patch
    }

    pub fn into_patch(self) -> PatchReviewData {
        self.patch
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateReviewError {
    #[error("Review not found.")]
    NotFound,

    #[error("Unauthorized to update this review.")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateReviewUseCase: Send + Sync {
    async fn execute(&self, command: UpdateReviewCommand)
        -> Result<ReviewResult, UpdateReviewError>;
}
