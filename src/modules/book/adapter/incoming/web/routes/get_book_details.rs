use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::book::adapter::incoming::web::routes::book_response::BookDetailsResponse;
use crate::modules::book::application::ports::incoming::use_cases::{
    GetBookDetailsError, DEFAULT_REVIEWS_PAGE_LIMIT,
};
use crate::shared::api::{parse_id, ApiResponse};
use crate::shared::pagination::PageQuery;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::{error, warn};

/// Book details with rating summary and a page of reviews
#[utoipa::path(
    get,
    path = "/api/v1/books/{book_id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("book_id" = String, Path, description = "Book UUID"),
        ("page" = Option<u64>, Query, description = "Review page (default 1)"),
        ("limit" = Option<u64>, Query, description = "Reviews per page (default 5, max 100)")
    ),
    responses(
        (
            status = 200,
            description = "Book details",
            body = inline(SuccessResponse<BookDetailsResponse>)
        ),
        (
            status = 400,
            description = "Malformed book id",
            body = ErrorResponse,
            example = json!({
                "status": 400,
                "success": false,
                "code": "INVALID_BOOK_ID",
                "message": "Invalid book ID."
            })
        ),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (
            status = 404,
            description = "Book not found",
            body = ErrorResponse,
            example = json!({
                "status": 404,
                "success": false,
                "code": "BOOK_NOT_FOUND",
                "message": "Book not found."
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/v1/books/{book_id}")]
pub async fn get_book_details_handler(
    _user: AuthenticatedUser,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let book_id = match parse_id(&path.into_inner(), "INVALID_BOOK_ID", "Invalid book ID.") {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let page = query.to_page_request(DEFAULT_REVIEWS_PAGE_LIMIT);

    match data.book.get_details.execute(book_id, page).await {
        Ok(details) => ApiResponse::success(
            BookDetailsResponse::from(details),
            "Book details fetched successfully.",
        ),
        Err(GetBookDetailsError::NotFound) => {
            warn!(book_id = %book_id, "Book not found");
            ApiResponse::not_found("BOOK_NOT_FOUND", "Book not found.")
        }
        Err(e) => {
            error!(book_id = %book_id, error = %e, "Failed to fetch book details");
            ApiResponse::internal_error()
        }
    }
}
