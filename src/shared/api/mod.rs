mod json_config;
mod path;
mod response;

pub use json_config::{custom_json_config, JSON_BODY_LIMIT};
pub use path::parse_id;
pub use response::{ApiError, ApiResponse};
