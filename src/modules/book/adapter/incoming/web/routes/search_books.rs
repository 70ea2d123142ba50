use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::book::adapter::incoming::web::routes::book_response::BookListResponse;
use crate::modules::book::application::ports::incoming::use_cases::{
    SearchBooksError, DEFAULT_BOOKS_PAGE_LIMIT,
};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchBooksQuery {
    /// Matched against title, author and genre
    pub query: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Search books by title, author or genre
///
/// Must be registered before `/api/v1/books/{book_id}`.
#[utoipa::path(
    get,
    path = "/api/v1/books/search",
    tag = "books",
    security(("bearer_auth" = [])),
    params(SearchBooksQuery),
    responses(
        (
            status = 200,
            description = "Matching books",
            body = inline(SuccessResponse<BookListResponse>)
        ),
        (
            status = 400,
            description = "Missing search term",
            body = ErrorResponse,
            example = json!({
                "status": 400,
                "success": false,
                "code": "VALIDATION_ERROR",
                "message": "Search query is required."
            })
        ),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/v1/books/search")]
pub async fn search_books_handler(
    _user: AuthenticatedUser,
    query: web::Query<SearchBooksQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::from_query(
        query.page.as_deref(),
        query.limit.as_deref(),
        DEFAULT_BOOKS_PAGE_LIMIT,
    );
    let term = query.query.unwrap_or_default();

    match data.book.search.execute(&term, page).await {
        Ok(result) => ApiResponse::success(
            BookListResponse::from(result),
            "Books fetched successfully.",
        ),
        Err(SearchBooksError::MissingQuery) => {
            warn!("Book search without a query");
            ApiResponse::bad_request("VALIDATION_ERROR", &SearchBooksError::MissingQuery.to_string())
        }
        Err(e) => {
            error!(term = %term, error = %e, "Book search failed");
            ApiResponse::internal_error()
        }
    }
}
