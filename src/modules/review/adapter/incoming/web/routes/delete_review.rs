use crate::api::schemas::{EmptyData, ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::review::application::ports::incoming::use_cases::{
    DeleteReviewCommand, DeleteReviewError,
};
use crate::shared::api::{parse_id, ApiResponse};
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::{error, warn};

/// Delete your review
#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{review_id}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("review_id" = String, Path, description = "Review UUID")),
    responses(
        (
            status = 200,
            description = "Review deleted",
            body = inline(SuccessResponse<EmptyData>),
            example = json!({
                "status": 200,
                "success": true,
                "data": {},
                "message": "Review deleted successfully."
            })
        ),
        (status = 400, description = "Invalid review id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Not the review's author", body = ErrorResponse),
        (status = 404, description = "Review not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/v1/reviews/{review_id}")]
pub async fn delete_review_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let review_id = match parse_id(&path.into_inner(), "INVALID_REVIEW_ID", "Invalid review ID.") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let command = DeleteReviewCommand {
        review_id,
        actor: user.user_id,
    };

    match data.review.delete.execute(command).await {
        Ok(()) => ApiResponse::success(serde_json::json!({}), "Review deleted successfully."),
        Err(DeleteReviewError::NotFound) => {
            ApiResponse::not_found("REVIEW_NOT_FOUND", "Review not found.")
        }
        Err(e @ DeleteReviewError::Forbidden) => {
            warn!(%review_id, user_id = %user.user_id, "Forbidden review delete");
            ApiResponse::forbidden("FORBIDDEN", &e.to_string())
        }
        Err(DeleteReviewError::RepositoryError(e)) => {
            error!(%review_id, error = %e, "Failed to delete review");
            ApiResponse::internal_error()
        }
    }
}
