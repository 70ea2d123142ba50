use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::review::application::ports::outgoing::ReviewResult;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: Uuid,
    pub book_id: Uuid,
    pub user_id: Uuid,

    #[schema(example = 4, minimum = 1, maximum = 5)]
    pub rating: i32,

    #[schema(example = "A slow start, but worth it.")]
    pub comment: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReviewResult> for ReviewResponse {
    fn from(review: ReviewResult) -> Self {
        Self {
            id: review.id,
            book_id: review.book_id,
            user_id: review.user_id.value(),
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}
