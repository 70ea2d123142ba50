// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Success envelope: `{ status, success: true, data, message }`
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: u16,
    pub success: bool,
    pub data: T,
    pub message: String,
}

/// Error envelope: `{ status, success: false, code, message }`
#[derive(Serialize, Clone)]
pub struct ApiError {
    pub status: u16,
    pub success: bool,
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// Build the envelope without turning it into a response.
    /// Handlers that attach cookies or headers use this with their own builder.
    pub fn new(status: StatusCode, data: T, message: &str) -> Self {
        Self {
            status: status.as_u16(),
            success: true,
            data,
            message: message.to_string(),
        }
    }

    pub fn success(data: T, message: &str) -> HttpResponse {
        HttpResponse::Ok().json(Self::new(StatusCode::OK, data, message))
    }

    pub fn created(data: T, message: &str) -> HttpResponse {
        HttpResponse::Created().json(Self::new(StatusCode::CREATED, data, message))
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiError {
            status: status.as_u16(),
            success: false,
            code: code.to_string(),
            message: message.to_string(),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn forbidden(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn conflict(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
