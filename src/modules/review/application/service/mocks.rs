use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::review::application::ports::outgoing::{
    CreateReviewData, PatchReviewData, ReviewRepository, ReviewRepositoryError, ReviewResult,
};

mock! {
    pub ReviewRepo {}

    #[async_trait]
    impl ReviewRepository for ReviewRepo {
        async fn find_by_id(&self, review_id: Uuid) -> Result<Option<ReviewResult>, ReviewRepositoryError>;
        async fn exists_for(&self, book_id: Uuid, user_id: UserId) -> Result<bool, ReviewRepositoryError>;
        async fn create_review(&self, data: CreateReviewData) -> Result<ReviewResult, ReviewRepositoryError>;
        async fn update_review(
            &self,
            review_id: Uuid,
            data: PatchReviewData,
        ) -> Result<ReviewResult, ReviewRepositoryError>;
        async fn delete_review(&self, review_id: Uuid) -> Result<(), ReviewRepositoryError>;
    }
}

pub fn stored_review(id: Uuid, owner: UserId, rating: i32) -> ReviewResult {
    let now = Utc::now();
    ReviewResult {
        id,
        book_id: Uuid::new_v4(),
        user_id: owner,
        rating,
        comment: Some("Solid".to_string()),
        created_at: now,
        updated_at: now,
    }
}
