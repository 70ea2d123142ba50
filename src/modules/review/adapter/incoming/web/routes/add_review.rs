use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::review::adapter::incoming::web::routes::review_response::ReviewResponse;
use crate::modules::review::application::ports::incoming::use_cases::{
    AddReviewCommand, AddReviewError,
};
use crate::shared::api::{parse_id, ApiResponse};
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request body for reviewing a book
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AddReviewRequest {
    /// Integer from 1 to 5
    #[schema(example = 4)]
    pub rating: Option<i64>,

    #[schema(example = "A slow start, but worth it.")]
    pub comment: Option<String>,
}

fn map_add_review_error(
    err: AddReviewError,
    book_id: Uuid,
    user: &AuthenticatedUser,
) -> HttpResponse {
    match err {
        AddReviewError::BookNotFound => {
            warn!(%book_id, user_id = %user.user_id, "Review for unknown book");
            ApiResponse::not_found("BOOK_NOT_FOUND", "Book not found.")
        }
        AddReviewError::AlreadyReviewed => {
            warn!(%book_id, user_id = %user.user_id, "Duplicate review");
            ApiResponse::conflict("REVIEW_ALREADY_EXISTS", "You have already reviewed this book.")
        }
        AddReviewError::RepositoryError(e) => {
            error!(%book_id, user_id = %user.user_id, error = %e, "Failed to add review");
            ApiResponse::internal_error()
        }
    }
}

/// Review a book
///
/// One review per user per book.
#[utoipa::path(
    post,
    path = "/api/v1/books/{book_id}/reviews",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("book_id" = String, Path, description = "Book UUID")),
    request_body = AddReviewRequest,
    responses(
        (
            status = 201,
            description = "Review added",
            body = inline(SuccessResponse<ReviewResponse>)
        ),
        (
            status = 400,
            description = "Invalid book id or rating",
            body = ErrorResponse,
            example = json!({
                "status": 400,
                "success": false,
                "code": "VALIDATION_ERROR",
                "message": "Rating must be between 1 and 5."
            })
        ),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (
            status = 409,
            description = "Already reviewed",
            body = ErrorResponse,
            example = json!({
                "status": 409,
                "success": false,
                "code": "REVIEW_ALREADY_EXISTS",
                "message": "You have already reviewed this book."
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/v1/books/{book_id}/reviews")]
pub async fn add_review_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    req: web::Json<AddReviewRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let book_id = match parse_id(&path.into_inner(), "INVALID_BOOK_ID", "Invalid book ID.") {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let dto = req.into_inner();

    let command = match AddReviewCommand::new(book_id, user.user_id, dto.rating, dto.comment) {
        Ok(cmd) => cmd,
        Err(e) => {
            warn!(%book_id, user_id = %user.user_id, "Invalid rating");
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.review.add.execute(command).await {
        Ok(review) => {
            info!(review_id = %review.id, %book_id, "Review added via API");
            ApiResponse::created(ReviewResponse::from(review), "Review added successfully.")
        }
        Err(e) => map_add_review_error(e, book_id, &user),
    }
}
