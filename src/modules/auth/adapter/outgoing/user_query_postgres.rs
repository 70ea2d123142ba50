use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn map_to_user(model: UserModel) -> User {
    User {
        id: UserId::from(model.id),
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        refresh_token_hash: model.refresh_token_hash,
        created_at: model.created_at.with_timezone(&chrono::Utc),
        updated_at: model.updated_at.with_timezone(&chrono::Utc),
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(map_to_user))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(map_to_user))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(map_to_user))
    }

    async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<User>, UserQueryError> {
        if username.is_none() && email.is_none() {
            return Ok(None);
        }

        let mut condition = Condition::any();
        if let Some(username) = username {
            condition = condition.add(UserColumn::Username.eq(username));
        }
        if let Some(email) = email {
            condition = condition.add(UserColumn::Email.eq(email));
        }

        let user = UserEntity::find()
            .filter(condition)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(map_to_user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use uuid::Uuid;

    fn create_mock_user_model(id: Uuid) -> UserModel {
        let now = Utc::now();
        UserModel {
            id,
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hashed_password".to_string(),
            refresh_token_hash: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_success() {
        let user_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_user_model(user_id)]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let user = query
            .find_by_id(UserId::from(user_id))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.id.value(), user_id);
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.username, "testuser");
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query.find_by_id(UserId::from(Uuid::new_v4())).await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query.find_by_id(UserId::from(Uuid::new_v4())).await;

        match result.unwrap_err() {
            UserQueryError::DatabaseError(msg) => assert!(msg.contains("connection timeout")),
        }
    }

    #[tokio::test]
    async fn test_find_by_email_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_user_model(Uuid::new_v4())]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let user = query
            .find_by_email("test@example.com")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_find_by_username_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        assert!(query.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_username_or_email_matches_either() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_user_model(Uuid::new_v4())]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let user = query
            .find_by_username_or_email(Some("testuser"), Some("other@example.com"))
            .await
            .unwrap();

        assert_eq!(user.unwrap().username, "testuser");
    }

    #[tokio::test]
    async fn test_find_by_username_or_email_without_keys_skips_query() {
        // No results queued: a query would fail the mock
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let user = query.find_by_username_or_email(None, None).await.unwrap();

        assert!(user.is_none());
    }

    #[test]
    fn test_map_to_user_keeps_refresh_reference() {
        let mut model = create_mock_user_model(Uuid::new_v4());
        model.refresh_token_hash = Some("deadbeef".to_string());

        let user = map_to_user(model.clone());

        assert_eq!(user.id.value(), model.id);
        assert_eq!(user.password_hash, model.password_hash);
        assert_eq!(user.refresh_token_hash.as_deref(), Some("deadbeef"));
    }
}
