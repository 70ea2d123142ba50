use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::cookies::set_token_cookies;
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

/// Login request from client. Either username or email identifies the user.
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "johndoe")]
    pub username: Option<String>,

    #[schema(example = "john@example.com")]
    pub email: Option<String>,

    #[schema(example = "SecurePass123!")]
    pub password: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    user: LoginUserInfo,

    /// JWT access token (short-lived)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    /// JWT refresh token (long-lived)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    refresh_token: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserInfo {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: Uuid,

    #[schema(example = "johndoe")]
    username: String,

    #[schema(example = "john@example.com")]
    email: String,

    created_at: DateTime<Utc>,
}

/// User login
///
/// Authenticates with username or email plus password, returns JWT access and
/// refresh tokens in the body and as httpOnly cookies.
#[utoipa::path(
    post,
    path = "/api/v1/users/login",
    tag = "users",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>),
            example = json!({
                "status": 200,
                "success": true,
                "data": {
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "username": "johndoe",
                        "email": "john@example.com",
                        "createdAt": "2026-01-27T14:42:14Z"
                    },
                    "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "refreshToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
                },
                "message": "User logged in successfully."
            })
        ),
        (status = 400, description = "Missing identifier or password", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "status": 401,
                "success": false,
                "code": "INVALID_CREDENTIALS",
                "message": "Invalid user credentials."
            })
        ),
        (status = 404, description = "User does not exist", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/v1/users/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.username, dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    info!(
        username = ?request.username(),
        email = ?request.email(),
        "Login attempt"
    );

    match data.auth.login.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User logged in successfully");

            let mut builder = HttpResponse::Ok();
            set_token_cookies(&mut builder, &response.tokens);

            builder.json(ApiResponse::new(
                StatusCode::OK,
                LoginResponse {
                    user: LoginUserInfo {
                        id: response.user.id.value(),
                        username: response.user.username,
                        email: response.user.email,
                        created_at: response.user.created_at,
                    },
                    access_token: response.tokens.access_token,
                    refresh_token: response.tokens.refresh_token,
                },
                "User logged in successfully.",
            ))
        }

        Err(LoginError::UserNotFound) => {
            warn!("Login failed: user not found");
            ApiResponse::not_found("USER_NOT_FOUND", "User does not exist.")
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid user credentials.")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) | Err(LoginError::RepositoryError(ref e)) => {
            error!(error = %e, "Database operation failed during login");
            ApiResponse::internal_error()
        }
    }
}
