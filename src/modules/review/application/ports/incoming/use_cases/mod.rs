mod add_review;
mod delete_review;
mod update_review;

pub use add_review::{AddReviewCommand, AddReviewError, AddReviewUseCase};
pub use delete_review::{DeleteReviewCommand, DeleteReviewError, DeleteReviewUseCase};
pub use update_review::{UpdateReviewCommand, UpdateReviewError, UpdateReviewUseCase};
