use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenPair, TokenProvider, UserQuery, UserRepository,
};
use crate::auth::application::services::hash_token;

// ========================= Login Request =========================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Username or email is required.")]
    MissingIdentifier,

    #[error("Password is required.")]
    MissingPassword,
}

/// Validated login request. At least one identifier is present and both
/// identifiers are normalized the way they are stored.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    username: Option<String>,
    email: Option<String>,
    password: String,
}

impl LoginRequest {
    pub fn new(
        username: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<Self, LoginRequestError> {
        let username = normalize(username);
        let email = normalize(email);

        if username.is_none() && email.is_none() {
            return Err(LoginRequestError::MissingIdentifier);
        }

        let password = password
            .filter(|p| !p.is_empty())
            .ok_or(LoginRequestError::MissingPassword)?;

        Ok(Self {
            username,
            email,
            password,
        })
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

// ====================== Login Error =============================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("User does not exist.")]
    UserNotFound,

    #[error("Invalid user credentials.")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ============================ Login Response =================================

#[derive(Debug, Clone)]
pub struct LoginUserResponse {
    pub user: UserProfile,
    pub tokens: TokenPair,
}

// ============================ Login User Use Case =============================

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> LoginUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> ILoginUserUseCase for LoginUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let user = self
            .query
            .find_by_username_or_email(request.username(), request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::UserNotFound)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let tokens = self
            .token_provider
            .generate_token_pair(user.id.value())
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        // Only the digest is stored; it becomes the one valid refresh token
        self.repository
            .set_refresh_token_hash(user.id, Some(hash_token(&tokens.refresh_token)))
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        Ok(LoginUserResponse {
            user: UserProfile::from(&user),
            tokens,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{User, UserId};
    use crate::auth::application::ports::outgoing::{
        CreateUserData, HashError, TokenClaims, TokenError, UserQueryError, UserRepositoryError,
    };
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    // ---------------- mocks ----------------

    #[derive(Default)]
    struct MockUserQuery {
        user: Option<User>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, _user_id: UserId) -> Result<Option<User>, UserQueryError> {
            unimplemented!("not used in login tests")
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
            unimplemented!("not used in login tests")
        }

        async fn find_by_username(&self, _username: &str) -> Result<Option<User>, UserQueryError> {
            unimplemented!("not used in login tests")
        }

        async fn find_by_username_or_email(
            &self,
            username: Option<&str>,
            email: Option<&str>,
        ) -> Result<Option<User>, UserQueryError> {
            Ok(self
                .user
                .clone()
                .filter(|u| username == Some(u.username.as_str()) || email == Some(u.email.as_str())))
        }
    }

    #[derive(Default)]
    struct RecordingRepository {
        stored: Mutex<Option<Option<String>>>,
    }

    #[async_trait]
    impl UserRepository for Arc<RecordingRepository> {
        async fn create_user(&self, _data: CreateUserData) -> Result<User, UserRepositoryError> {
            unimplemented!("not used in login tests")
        }

        async fn set_refresh_token_hash(
            &self,
            _user_id: UserId,
            token_hash: Option<String>,
        ) -> Result<(), UserRepositoryError> {
            *self.stored.lock().unwrap() = Some(token_hash);
            Ok(())
        }

        async fn rotate_refresh_token_hash(
            &self,
            _user_id: UserId,
            _current: String,
            _replacement: String,
        ) -> Result<bool, UserRepositoryError> {
            unimplemented!("not used in login tests")
        }
    }

    struct PlainHasher;

    #[async_trait]
    impl PasswordHasher for PlainHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(password.to_string())
        }

        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
            Ok(password == hash)
        }
    }

    struct FixedTokens;

    impl TokenProvider for FixedTokens {
        fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
            Ok(format!("access-{user_id}"))
        }

        fn generate_refresh_token(&self, user_id: Uuid) -> Result<String, TokenError> {
            Ok(format!("refresh-{user_id}"))
        }

        fn verify_access_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!("not used in login tests")
        }

        fn verify_refresh_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!("not used in login tests")
        }
    }

    fn user() -> User {
        User {
            id: UserId::from(Uuid::new_v4()),
            username: "reader".to_string(),
            email: "reader@example.com".to_string(),
            password_hash: "correct-password".to_string(),
            refresh_token_hash: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn use_case(
        user: Option<User>,
    ) -> (
        LoginUserUseCase<MockUserQuery, Arc<RecordingRepository>>,
        Arc<RecordingRepository>,
    ) {
        let repo = Arc::new(RecordingRepository::default());
        let uc = LoginUserUseCase::new(
            MockUserQuery { user },
            repo.clone(),
            Arc::new(PlainHasher),
            Arc::new(FixedTokens),
        );
        (uc, repo)
    }

    // ---------------- request validation ----------------

    #[test]
    fn request_requires_an_identifier() {
        let err = LoginRequest::new(None, Some("  ".into()), Some("pw".into())).unwrap_err();
        assert_eq!(err, LoginRequestError::MissingIdentifier);
    }

    #[test]
    fn request_requires_a_password() {
        let err = LoginRequest::new(Some("reader".into()), None, None).unwrap_err();
        assert_eq!(err, LoginRequestError::MissingPassword);
    }

    #[test]
    fn request_normalizes_identifiers() {
        let req = LoginRequest::new(Some(" Reader ".into()), None, Some("pw".into())).unwrap();
        assert_eq!(req.username(), Some("reader"));
        assert_eq!(req.email(), None);
    }

    // ---------------- use case ----------------

    #[tokio::test]
    async fn login_by_username_issues_tokens_and_stores_digest() {
        let user = user();
        let user_id = user.id.value();
        let (uc, repo) = use_case(Some(user));

        let request =
            LoginRequest::new(Some("reader".into()), None, Some("correct-password".into()))
                .unwrap();
        let response = uc.execute(request).await.unwrap();

        assert_eq!(response.user.username, "reader");
        assert_eq!(response.tokens.access_token, format!("access-{user_id}"));
        assert_eq!(response.tokens.refresh_token, format!("refresh-{user_id}"));

        let stored = repo.stored.lock().unwrap().clone().unwrap();
        assert_eq!(stored, Some(hash_token(&format!("refresh-{user_id}"))));
    }

    #[tokio::test]
    async fn login_by_email_works() {
        let (uc, _) = use_case(Some(user()));

        let request = LoginRequest::new(
            None,
            Some("Reader@Example.com".into()),
            Some("correct-password".into()),
        )
        .unwrap();

        assert!(uc.execute(request).await.is_ok());
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let (uc, repo) = use_case(None);

        let request =
            LoginRequest::new(Some("ghost".into()), None, Some("whatever".into())).unwrap();
        let result = uc.execute(request).await;

        assert_eq!(result.unwrap_err(), LoginError::UserNotFound);
        assert!(repo.stored.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let (uc, repo) = use_case(Some(user()));

        let request =
            LoginRequest::new(Some("reader".into()), None, Some("wrong".into())).unwrap();
        let result = uc.execute(request).await;

        assert_eq!(result.unwrap_err(), LoginError::InvalidCredentials);
        assert!(repo.stored.lock().unwrap().is_none());
    }
}
