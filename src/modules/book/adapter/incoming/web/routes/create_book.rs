use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::book::adapter::incoming::web::routes::book_response::BookResponse;
use crate::modules::book::application::ports::incoming::use_cases::{
    CreateBookCommand, CreateBookError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for creating a book
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    #[schema(example = "Dune")]
    pub title: Option<String>,

    #[schema(example = "Frank Herbert")]
    pub author: Option<String>,

    #[schema(example = "Sci-Fi")]
    pub genre: Option<String>,

    #[schema(example = "A desert planet and the spice that binds an empire.")]
    pub description: Option<String>,

    /// `YYYY-MM-DD`
    #[schema(example = "1965-08-01")]
    pub published_date: Option<String>,
}

fn map_create_book_error(err: CreateBookError, user: &AuthenticatedUser) -> HttpResponse {
    match err {
        CreateBookError::CreatorNotFound => {
            warn!(user_id = %user.user_id, "Book creation by a user that no longer exists");
            ApiResponse::unauthorized("UNAUTHORIZED", "Unauthorized request.")
        }
        CreateBookError::RepositoryError(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to create book");
            ApiResponse::internal_error()
        }
    }
}

/// Create a book
#[utoipa::path(
    post,
    path = "/api/v1/books",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = CreateBookRequest,
    responses(
        (
            status = 201,
            description = "Book created",
            body = inline(SuccessResponse<BookResponse>)
        ),
        (
            status = 400,
            description = "Missing or invalid fields",
            body = ErrorResponse,
            example = json!({
                "status": 400,
                "success": false,
                "code": "VALIDATION_ERROR",
                "message": "Missing required fields. Title, author, and genre must be provided."
            })
        ),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/v1/books")]
pub async fn create_book_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateBookRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match CreateBookCommand::new(
        user.user_id,
        dto.title,
        dto.author,
        dto.genre,
        dto.description,
        dto.published_date,
    ) {
        Ok(cmd) => cmd,
        Err(e) => {
            warn!(user_id = %user.user_id, error = %e, "Invalid book input");
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.book.create.execute(command).await {
        Ok(book) => {
            info!(book_id = %book.id, user_id = %user.user_id, "Book created via API");
            ApiResponse::created(BookResponse::from(book), "Book created successfully.")
        }
        Err(e) => map_create_book_error(e, &user),
    }
}
