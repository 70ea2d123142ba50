use crate::api::schemas::{EmptyData, ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::cookies::clear_token_cookies;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::logout_user::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use tracing::{error, warn};

/// Log out the current user
///
/// Revokes the stored refresh token and clears both auth cookies.
#[utoipa::path(
    post,
    path = "/api/v1/users/logout",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (
            status = 200,
            description = "Logged out",
            body = inline(SuccessResponse<EmptyData>),
            example = json!({
                "status": 200,
                "success": true,
                "data": {},
                "message": "User logged out successfully."
            })
        ),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/v1/users/logout")]
pub async fn logout_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.logout.execute(user.user_id).await {
        Ok(()) => {
            let mut builder = HttpResponse::Ok();
            clear_token_cookies(&mut builder);
            builder.json(ApiResponse::new(
                StatusCode::OK,
                serde_json::json!({}),
                "User logged out successfully.",
            ))
        }

        Err(LogoutError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Logout for a user that no longer exists");
            ApiResponse::unauthorized("UNAUTHORIZED", "Unauthorized request.")
        }

        Err(LogoutError::RepositoryError(ref e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to revoke refresh token");
            ApiResponse::internal_error()
        }
    }
}
