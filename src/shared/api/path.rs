use actix_web::HttpResponse;
use uuid::Uuid;

use crate::shared::api::ApiResponse;

/// Parse a raw path segment as a UUID, or produce the 400 response the
/// handler should return as-is.
pub fn parse_id(raw: &str, code: &str, message: &str) -> Result<Uuid, HttpResponse> {
    Uuid::parse_str(raw.trim()).map_err(|_| ApiResponse::bad_request(code, message))
}
