use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{User, UserId};

/// Normalized values for a new user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    /// Replace (or clear, with `None`) the stored refresh-token reference.
    async fn set_refresh_token_hash(
        &self,
        user_id: UserId,
        token_hash: Option<String>,
    ) -> Result<(), UserRepositoryError>;

    /// Swap the stored reference from `current` to `replacement` in a single
    /// statement. `Ok(false)` when `current` is no longer the stored value.
    async fn rotate_refresh_token_hash(
        &self,
        user_id: UserId,
        current: String,
        replacement: String,
    ) -> Result<bool, UserRepositoryError>;
}
