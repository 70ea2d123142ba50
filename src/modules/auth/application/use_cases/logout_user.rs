use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

// ====================== Logout Error =============================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogoutError {
    #[error("User does not exist.")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ============================ Logout Use Case =============================

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<(), LogoutError>;
}

#[derive(Clone)]
pub struct LogoutUseCase<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> LogoutUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ILogoutUseCase for LogoutUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<(), LogoutError> {
        // Dropping the stored reference invalidates every outstanding refresh token
        self.repository
            .set_refresh_token_hash(user_id, None)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => LogoutError::UserNotFound,
                other => LogoutError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user_id, "User logged out");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::User;
    use crate::auth::application::ports::outgoing::CreateUserData;
    use mockall::mock;
    use mockall::predicate::eq;
    use uuid::Uuid;

    mock! {
        pub UserRepositoryMock {}

        #[async_trait]
        impl UserRepository for UserRepositoryMock {
            async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;
            async fn set_refresh_token_hash(
                &self,
                user_id: UserId,
                token_hash: Option<String>,
            ) -> Result<(), UserRepositoryError>;
            async fn rotate_refresh_token_hash(
                &self,
                user_id: UserId,
                current: String,
                replacement: String,
            ) -> Result<bool, UserRepositoryError>;
        }
    }

    #[tokio::test]
    async fn logout_clears_refresh_reference() {
        let user_id = UserId::from(Uuid::new_v4());

        let mut repo = MockUserRepositoryMock::new();
        repo.expect_set_refresh_token_hash()
            .with(eq(user_id), eq(None::<String>))
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = LogoutUseCase::new(repo);

        assert!(use_case.execute(user_id).await.is_ok());
    }

    #[tokio::test]
    async fn logout_for_unknown_user_is_not_found() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_set_refresh_token_hash()
            .returning(|_, _| Err(UserRepositoryError::UserNotFound));

        let use_case = LogoutUseCase::new(repo);
        let result = use_case.execute(UserId::from(Uuid::new_v4())).await;

        assert_eq!(result.unwrap_err(), LogoutError::UserNotFound);
    }

    #[tokio::test]
    async fn logout_database_failure_is_repository_error() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_set_refresh_token_hash()
            .returning(|_, _| Err(UserRepositoryError::DatabaseError("down".into())));

        let use_case = LogoutUseCase::new(repo);
        let result = use_case.execute(UserId::from(Uuid::new_v4())).await;

        assert!(matches!(result, Err(LogoutError::RepositoryError(_))));
    }
}
