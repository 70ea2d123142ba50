use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::review::application::domain::policies::ensure_owner;
use crate::modules::review::application::ports::incoming::use_cases::{
    DeleteReviewCommand, DeleteReviewError, DeleteReviewUseCase,
};
use crate::modules::review::application::ports::outgoing::{
    ReviewRepository, ReviewRepositoryError,
};

pub struct DeleteReviewService<R>
where
    R: ReviewRepository,
{
    review_repository: R,
}

impl<R> DeleteReviewService<R>
where
    R: ReviewRepository,
{
    pub fn new(review_repository: R) -> Self {
        Self { review_repository }
    }
}

fn map_repo_err(e: ReviewRepositoryError) -> DeleteReviewError {
    match e {
        ReviewRepositoryError::NotFound => DeleteReviewError::NotFound,
        other => DeleteReviewError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> DeleteReviewUseCase for DeleteReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    async fn execute(&self, command: DeleteReviewCommand) -> Result<(), DeleteReviewError> {
        let DeleteReviewCommand { review_id, actor } = command;

        let existing = self
            .review_repository
            .find_by_id(review_id)
            .await
            .map_err(map_repo_err)?
            .ok_or(DeleteReviewError::NotFound)?;

        ensure_owner(existing.user_id, actor).map_err(|_| {
            warn!(%review_id, %actor, "Review delete by non-owner");
            DeleteReviewError::Forbidden
        })?;

        self.review_repository
            .delete_review(review_id)
            .await
            .map_err(map_repo_err)?;

        info!(%review_id, %actor, "Review deleted");

        Ok(())
    }
}
