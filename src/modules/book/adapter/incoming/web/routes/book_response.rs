use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::book::application::ports::incoming::use_cases::BookDetails;
use crate::modules::book::application::ports::outgoing::BookView;
use crate::modules::review::application::ports::outgoing::ReviewWithReviewer;
use crate::shared::pagination::PageResult;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    #[schema(example = "7c9e6679-7425-40de-944b-e07fc1f90ae7")]
    pub id: Uuid,

    #[schema(example = "Dune")]
    pub title: String,

    #[schema(example = "Frank Herbert")]
    pub author: String,

    #[schema(example = "Sci-Fi")]
    pub genre: String,

    pub description: Option<String>,

    #[schema(example = "1965-08-01")]
    pub published_date: Option<NaiveDate>,

    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BookView> for BookResponse {
    fn from(view: BookView) -> Self {
        Self {
            id: view.id,
            title: view.title,
            author: view.author,
            genre: view.genre,
            description: view.description,
            published_date: view.published_date,
            created_by: view.created_by.value(),
            created_at: view.created_at,
            updated_at: view.updated_at,
        }
    }
}

/// Payload of the listing and search endpoints.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookListResponse {
    pub books: Vec<BookResponse>,
    pub total_books: u64,
    pub current_page: u64,

    /// Page size actually applied (requests above 100 are capped)
    #[schema(example = 10)]
    pub limit: u64,

    pub total_pages: u64,
}

impl From<PageResult<BookView>> for BookListResponse {
    fn from(page: PageResult<BookView>) -> Self {
        let total_pages = page.total_pages();
        Self {
            books: page.items.into_iter().map(BookResponse::from).collect(),
            total_books: page.total,
            current_page: page.page,
            limit: page.limit,
            total_pages,
        }
    }
}

/// A review as shown under a book, with the reviewer's public identity.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookReviewResponse {
    pub id: Uuid,
    pub user_id: Uuid,

    #[schema(example = "johndoe")]
    pub username: String,

    #[schema(example = "john@example.com")]
    pub email: String,

    #[schema(example = 4, minimum = 1, maximum = 5)]
    pub rating: i32,

    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReviewWithReviewer> for BookReviewResponse {
    fn from(review: ReviewWithReviewer) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id.value(),
            username: review.username,
            email: review.email,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDetailsResponse {
    #[serde(flatten)]
    pub book: BookResponse,

    #[schema(example = 4.3)]
    pub average_rating: f64,

    pub total_reviews: u64,
    pub reviews: Vec<BookReviewResponse>,
    pub current_page: u64,

    /// Review page size actually applied (requests above 100 are capped)
    #[schema(example = 5)]
    pub limit: u64,

    pub total_pages: u64,
}

impl From<BookDetails> for BookDetailsResponse {
    fn from(details: BookDetails) -> Self {
        Self {
            book: details.book.into(),
            average_rating: details.average_rating,
            total_reviews: details.total_reviews,
            reviews: details
                .reviews
                .into_iter()
                .map(BookReviewResponse::from)
                .collect(),
            current_page: details.current_page,
            limit: details.limit,
            total_pages: details.total_pages,
        }
    }
}
