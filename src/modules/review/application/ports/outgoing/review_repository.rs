// src/modules/review/application/ports/outgoing/review_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::review::application::domain::entities::Rating;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReviewData {
    pub book_id: Uuid,
    pub user_id: UserId,
    pub rating: Rating,
    pub comment: Option<String>,
}

/// `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReviewData {
    pub rating: Option<Rating>,
    pub comment: Option<String>,
}

impl PatchReviewData {
    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.comment.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResult {
    pub id: Uuid,
    pub book_id: Uuid,
    pub user_id: UserId,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewRepositoryError {
    #[error("Review already exists for this book and user")]
    AlreadyExists,

    #[error("Book not found")]
    BookNotFound,

    #[error("Review not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (write side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_id(&self, review_id: Uuid) -> Result<Option<ReviewResult>, ReviewRepositoryError>;

    async fn exists_for(&self, book_id: Uuid, user_id: UserId) -> Result<bool, ReviewRepositoryError>;

    /// Maps the `(book_id, user_id)` unique violation to `AlreadyExists`.
    async fn create_review(&self, data: CreateReviewData) -> Result<ReviewResult, ReviewRepositoryError>;

    async fn update_review(
        &self,
        review_id: Uuid,
        data: PatchReviewData,
    ) -> Result<ReviewResult, ReviewRepositoryError>;

    async fn delete_review(&self, review_id: Uuid) -> Result<(), ReviewRepositoryError>;
}
