mod jwt_config;
mod jwt_service;

pub use jwt_config::{JwtConfig, MIN_SECRET_LEN};
pub use jwt_service::JwtTokenService;
