// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Mirrors the HTTP status code
    #[schema(example = 200)]
    pub status: u16,
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
    /// Human-readable summary
    #[schema(example = "Request completed successfully.")]
    pub message: String,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Mirrors the HTTP status code
    #[schema(example = 404)]
    pub status: u16,
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error code for programmatic handling
    #[schema(example = "BOOK_NOT_FOUND")]
    pub code: String,
    /// Human-readable error message
    #[schema(example = "Book not found.")]
    pub message: String,
}

/// Placeholder for responses whose `data` is an empty object
#[derive(Serialize, ToSchema)]
pub struct EmptyData {}
