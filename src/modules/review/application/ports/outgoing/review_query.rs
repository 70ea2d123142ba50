// src/modules/review/application/ports/outgoing/review_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::pagination::PageRequest;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Aggregate over every review of one book.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewStats {
    pub total_reviews: u64,
    pub average_rating: f64,
}

impl ReviewStats {
    pub fn empty() -> Self {
        Self {
            total_reviews: 0,
            average_rating: 0.0,
        }
    }

    /// Mean rating rounded to one decimal place, halves to even; 0 when
    /// there are no reviews.
    pub fn from_totals(count: u64, rating_sum: i64) -> Self {
        if count == 0 {
            return Self::empty();
        }

        let mean = rating_sum as f64 / count as f64;
        Self {
            total_reviews: count,
            average_rating: (mean * 10.0).round_ties_even() / 10.0,
        }
    }
}

/// A review with the reviewer's public identity attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWithReviewer {
    pub id: Uuid,
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side, joins users)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ReviewQuery: Send + Sync {
    async fn stats_for_book(&self, book_id: Uuid) -> Result<ReviewStats, ReviewQueryError>;

    /// Newest first, ties broken by id descending.
    async fn page_for_book(
        &self,
        book_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<ReviewWithReviewer>, ReviewQueryError>;
}
