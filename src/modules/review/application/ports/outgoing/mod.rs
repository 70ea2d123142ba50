pub mod review_query;
pub mod review_repository;

pub use review_query::{ReviewQuery, ReviewQueryError, ReviewStats, ReviewWithReviewer};
pub use review_repository::{
    CreateReviewData, PatchReviewData, ReviewRepository, ReviewRepositoryError, ReviewResult,
};
