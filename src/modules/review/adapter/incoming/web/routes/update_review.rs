use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::review::adapter::incoming::web::routes::review_response::ReviewResponse;
use crate::modules::review::application::ports::incoming::use_cases::{
    UpdateReviewCommand, UpdateReviewError,
};
use crate::shared::api::{parse_id, ApiResponse};
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

/// Fields to change; omitted fields keep their value
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateReviewRequest {
    #[schema(example = 5)]
    pub rating: Option<i64>,

    #[schema(example = "Even better the second time.")]
    pub comment: Option<String>,
}

/// Update your review
#[utoipa::path(
    put,
    path = "/api/v1/reviews/{review_id}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("review_id" = String, Path, description = "Review UUID")),
    request_body = UpdateReviewRequest,
    responses(
        (
            status = 200,
            description = "Review updated",
            body = inline(SuccessResponse<ReviewResponse>)
        ),
        (status = 400, description = "Invalid review id or rating", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (
            status = 403,
            description = "Not the review's author",
            body = ErrorResponse,
            example = json!({
                "status": 403,
                "success": false,
                "code": "FORBIDDEN",
                "message": "Unauthorized to update this review."
            })
        ),
        (status = 404, description = "Review not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/v1/reviews/{review_id}")]
pub async fn update_review_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    req: web::Json<UpdateReviewRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let review_id = match parse_id(&path.into_inner(), "INVALID_REVIEW_ID", "Invalid review ID.") {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let dto = req.into_inner();

    let command = match UpdateReviewCommand::new(review_id, user.user_id, dto.rating, dto.comment)
    {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.review.update.execute(command).await {
        Ok(review) => {
            ApiResponse::success(ReviewResponse::from(review), "Review updated successfully.")
        }
        Err(UpdateReviewError::NotFound) => {
            ApiResponse::not_found("REVIEW_NOT_FOUND", "Review not found.")
        }
        Err(e @ UpdateReviewError::Forbidden) => {
            warn!(%review_id, user_id = %user.user_id, "Forbidden review update");
            ApiResponse::forbidden("FORBIDDEN", &e.to_string())
        }
        Err(UpdateReviewError::RepositoryError(e)) => {
            error!(%review_id, error = %e, "Failed to update review");
            ApiResponse::internal_error()
        }
    }
}
