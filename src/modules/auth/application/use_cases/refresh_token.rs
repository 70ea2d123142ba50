use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    TokenError, TokenPair, TokenProvider, UserQuery, UserRepository,
};
use crate::auth::application::services::hash_token;

// ========================= Refresh Token Request =========================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshTokenRequestError {
    #[error("Refresh token is required.")]
    MissingToken,
}

/// A non-blank refresh token taken from the body or the cookie.
#[derive(Debug, Clone)]
pub struct RefreshTokenRequest {
    refresh_token: String,
}

impl RefreshTokenRequest {
    pub fn new(refresh_token: Option<String>) -> Result<Self, RefreshTokenRequestError> {
        let refresh_token = refresh_token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(RefreshTokenRequestError::MissingToken)?;

        Ok(Self { refresh_token })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

// ====================== Refresh Token Error =============================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Refresh token has expired.")]
    TokenExpired,

    #[error("Invalid refresh token.")]
    TokenInvalid,

    #[error("Refresh token has been revoked or already used.")]
    TokenRevoked,

    #[error("User does not exist.")]
    UserNotFound,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TokenError> for RefreshTokenError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::TokenExpired => RefreshTokenError::TokenExpired,
            TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
            _ => RefreshTokenError::TokenInvalid,
        }
    }
}

// ============================ Refresh Token Use Case =============================

#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(&self, request: RefreshTokenRequest) -> Result<TokenPair, RefreshTokenError>;
}

#[derive(Clone)]
pub struct RefreshTokenUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> RefreshTokenUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, token_provider: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            query,
            repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IRefreshTokenUseCase for RefreshTokenUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: RefreshTokenRequest) -> Result<TokenPair, RefreshTokenError> {
        let claims = self
            .token_provider
            .verify_refresh_token(request.refresh_token())?;

        let user_id = UserId::from(claims.sub);

        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| RefreshTokenError::QueryError(e.to_string()))?
            .ok_or(RefreshTokenError::UserNotFound)?;

        // Only the most recently issued refresh token is accepted
        let presented = hash_token(request.refresh_token());
        if user.refresh_token_hash.as_deref() != Some(presented.as_str()) {
            warn!(user_id = %user_id, "Refresh token does not match stored reference");
            return Err(RefreshTokenError::TokenRevoked);
        }

        let tokens = self
            .token_provider
            .generate_token_pair(user_id.value())
            .map_err(|e| RefreshTokenError::TokenGenerationFailed(e.to_string()))?;

        // Compare-and-swap: a concurrent refresh with the same token loses here
        let rotated = self
            .repository
            .rotate_refresh_token_hash(user_id, presented, hash_token(&tokens.refresh_token))
            .await
            .map_err(|e| RefreshTokenError::RepositoryError(e.to_string()))?;

        if !rotated {
            warn!(user_id = %user_id, "Refresh token was rotated concurrently");
            return Err(RefreshTokenError::TokenRevoked);
        }

        info!(user_id = %user_id, "Refresh token rotated");

        Ok(tokens)
    }
}
