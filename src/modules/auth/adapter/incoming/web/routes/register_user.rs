use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::create_user::{CreateUserError, CreateUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Username (unique, stored lowercase)
    #[schema(example = "johndoe")]
    pub username: Option<String>,

    /// Email address (unique, stored lowercase)
    #[schema(example = "john@example.com")]
    pub email: Option<String>,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,

    #[schema(example = "johndoe")]
    pub username: String,

    #[schema(example = "john@example.com")]
    pub email: String,

    pub created_at: DateTime<Utc>,
}

fn map_create_user_error(err: CreateUserError, username: &str, email: &str) -> HttpResponse {
    match err {
        CreateUserError::UserAlreadyExists => {
            warn!(username = %username, email = %email, "User already exists");
            ApiResponse::conflict(
                "USER_ALREADY_EXISTS",
                "User with this username or email already exists.",
            )
        }

        other => {
            error!(
                username = %username,
                email = %email,
                error = %other,
                "User registration failed"
            );
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/users/signup",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (
            status = 201,
            description = "User created successfully",
            body = inline(SuccessResponse<RegisteredUser>),
            example = json!({
                "status": 201,
                "success": true,
                "data": {
                    "id": "123e4567-e89b-12d3-a456-426614174000",
                    "username": "johndoe",
                    "email": "john@example.com",
                    "createdAt": "2026-01-27T14:42:14Z"
                },
                "message": "User registered successfully."
            })
        ),
        (
            status = 400,
            description = "Missing field or invalid email",
            body = ErrorResponse,
            example = json!({
                "status": 400,
                "success": false,
                "code": "VALIDATION_ERROR",
                "message": "Email is required."
            })
        ),
        (
            status = 409,
            description = "User already exists",
            body = ErrorResponse,
            example = json!({
                "status": 409,
                "success": false,
                "code": "USER_ALREADY_EXISTS",
                "message": "User with this username or email already exists."
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/v1/users/signup")]
pub async fn register_user_handler(
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let input = match CreateUserInput::new(dto.username, dto.email, dto.password) {
        Ok(input) => input,
        Err(e) => {
            warn!(error = %e, "Invalid registration input");
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    let username = input.username().to_string();
    let email = input.email().to_string();

    match data.auth.create_user.execute(input).await {
        Ok(profile) => {
            info!(user_id = %profile.id, username = %profile.username, "User registered");

            ApiResponse::created(
                RegisteredUser {
                    id: profile.id.value(),
                    username: profile.username,
                    email: profile.email,
                    created_at: profile.created_at,
                },
                "User registered successfully.",
            )
        }
        Err(e) => map_create_user_error(e, &username, &email),
    }
}
