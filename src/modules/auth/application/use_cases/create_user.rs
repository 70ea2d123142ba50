use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::UserProfile;
use crate::modules::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

pub const MAX_USERNAME_LEN: usize = 50;

// ========================= Input =========================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateUserInputError {
    #[error("{0} is required.")]
    MissingField(&'static str),

    #[error("Invalid email format.")]
    InvalidEmail,

    #[error("Username must be at most {MAX_USERNAME_LEN} characters.")]
    UsernameTooLong,
}

/// Validated signup input. Username and email are trimmed and lowercased.
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    username: String,
    email: String,
    password: String,
}

impl CreateUserInput {
    pub fn new(
        username: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<Self, CreateUserInputError> {
        let username = non_blank(username).ok_or(CreateUserInputError::MissingField("Username"))?;
        let email = non_blank(email).ok_or(CreateUserInputError::MissingField("Email"))?;
        let password = password
            .filter(|p| !p.trim().is_empty())
            .ok_or(CreateUserInputError::MissingField("Password"))?;

        let username = username.to_lowercase();
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(CreateUserInputError::UsernameTooLong);
        }

        if !EmailAddress::is_valid(&email) {
            return Err(CreateUserInputError::InvalidEmail);
        }

        Ok(Self {
            username,
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ========================= Error =========================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateUserError {
    #[error("User with this username or email already exists.")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ========================= Use case =========================

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, input: CreateUserInput) -> Result<UserProfile, CreateUserError>;
}

#[derive(Clone)]
pub struct CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> ICreateUserUseCase for CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: CreateUserInput) -> Result<UserProfile, CreateUserError> {
        // Fast path; the unique indexes still decide under concurrency
        let existing = self
            .query
            .find_by_username_or_email(Some(input.username()), Some(input.email()))
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            return Err(CreateUserError::UserAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(input.password())
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create_user(CreateUserData {
                username: input.username().to_string(),
                email: input.email().to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => CreateUserError::UserAlreadyExists,
                other => CreateUserError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(UserProfile::from(&user))
    }
}
