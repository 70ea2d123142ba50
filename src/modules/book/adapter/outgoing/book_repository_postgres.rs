// src/modules/book/adapter/outgoing/book_repository_postgres.rs

use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::book::adapter::outgoing::book_query_postgres::model_to_view;
use crate::modules::book::adapter::outgoing::sea_orm_entity::books::ActiveModel as BookActiveModel;
use crate::modules::book::application::ports::outgoing::{
    BookRepository, BookRepositoryError, BookView, CreateBookData,
};
use crate::shared::db::is_foreign_key_violation;

#[derive(Clone, Debug)]
pub struct BookRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BookRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for BookRepositoryPostgres {
    async fn create_book(&self, data: CreateBookData) -> Result<BookView, BookRepositoryError> {
        let active_book = BookActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            author: Set(data.author),
            genre: Set(data.genre),
            description: Set(data.description),
            published_date: Set(data.published_date),
            created_by: Set(data.created_by.value()),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_book.insert(&*self.db).await.map_err(|e| {
            if is_foreign_key_violation(&e) {
                return BookRepositoryError::CreatorNotFound;
            }
            BookRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(model_to_view(inserted))
    }
}
