mod add_review_service;
mod delete_review_service;
mod update_review_service;

#[cfg(test)]
mod mocks;

pub use add_review_service::AddReviewService;
pub use delete_review_service::DeleteReviewService;
pub use update_review_service::UpdateReviewService;
