use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::review::application::domain::policies::ensure_owner;
use crate::modules::review::application::ports::incoming::use_cases::{
    UpdateReviewCommand, UpdateReviewError, UpdateReviewUseCase,
};
use crate::modules::review::application::ports::outgoing::{
    ReviewRepository, ReviewRepositoryError, ReviewResult,
};

pub struct UpdateReviewService<R>
where
    R: ReviewRepository,
{
    review_repository: R,
}

impl<R> UpdateReviewService<R>
where
    R: ReviewRepository,
{
    pub fn new(review_repository: R) -> Self {
        Self { review_repository }
    }
}

fn map_repo_err(e: ReviewRepositoryError) -> UpdateReviewError {
    match e {
        ReviewRepositoryError::NotFound => UpdateReviewError::NotFound,
        other => UpdateReviewError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> UpdateReviewUseCase for UpdateReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateReviewCommand,
    ) -> Result<ReviewResult, UpdateReviewError> {
        let review_id = command.review_id();
        let actor = command.actor();

        let existing = self
            .review_repository
            .find_by_id(review_id)
            .await
            .map_err(map_repo_err)?
            .ok_or(UpdateReviewError::NotFound)?;

        ensure_owner(existing.user_id, actor).map_err(|_| {
            warn!(%review_id, %actor, "Review update by non-owner");
            UpdateReviewError::Forbidden
        })?;

        if command.patch().is_empty() {
            return Ok(existing);
        }

        let updated = self
            .review_repository
            .update_review(review_id, command.into_patch())
            .await
            .map_err(map_repo_err)?;

        info!(%review_id, %actor, "Review updated");

        Ok(updated)
    }
}
