use crate::api::schemas::{EmptyData, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    CreateUserRequest, LoginRequestDto, LoginResponse, LoginUserInfo, RefreshTokenRequestDto,
    RefreshTokenResponseBody, RegisteredUser,
};
// Books
use crate::book::adapter::incoming::web::routes::{
    BookDetailsResponse, BookListResponse, BookResponse, BookReviewResponse, CreateBookRequest,
};
// Reviews
use crate::review::adapter::incoming::web::routes::{
    AddReviewRequest, ReviewResponse, UpdateReviewRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Review API",
        version = "1.0.0",
        description = "Books, ratings and reader reviews",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // User endpoints
        crate::auth::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token::refresh_token_handler,

        // Book endpoints
        crate::book::adapter::incoming::web::routes::create_book::create_book_handler,
        crate::book::adapter::incoming::web::routes::get_books::get_books_handler,
        crate::book::adapter::incoming::web::routes::search_books::search_books_handler,
        crate::book::adapter::incoming::web::routes::get_book_details::get_book_details_handler,

        // Review endpoints
        crate::review::adapter::incoming::web::routes::add_review::add_review_handler,
        crate::review::adapter::incoming::web::routes::update_review::update_review_handler,
        crate::review::adapter::incoming::web::routes::delete_review::delete_review_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            EmptyData,

            // User DTOs
            CreateUserRequest,
            RegisteredUser,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,
            RefreshTokenRequestDto,
            RefreshTokenResponseBody,

            // Book DTOs
            CreateBookRequest,
            BookResponse,
            BookListResponse,
            BookDetailsResponse,
            BookReviewResponse,

            // Review DTOs
            AddReviewRequest,
            UpdateReviewRequest,
            ReviewResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "users", description = "Signup, login and token endpoints"),
        (name = "books", description = "Book catalogue endpoints"),
        (name = "reviews", description = "Review endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/v1/users/login"))
                        .build(),
                ),
            )
        }
    }
}
