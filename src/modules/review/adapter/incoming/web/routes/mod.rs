pub mod add_review;
pub mod delete_review;
pub mod review_response;
pub mod update_review;

pub use add_review::{add_review_handler, AddReviewRequest};
pub use delete_review::delete_review_handler;
pub use review_response::ReviewResponse;
pub use update_review::{update_review_handler, UpdateReviewRequest};
