use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteReviewCommand {
    pub review_id: Uuid,
    pub actor: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteReviewError {
    #[error("Review not found.")]
    NotFound,

    #[error("Unauthorized to delete this review.")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteReviewUseCase: Send + Sync {
    async fn execute(&self, command: DeleteReviewCommand) -> Result<(), DeleteReviewError>;
}
