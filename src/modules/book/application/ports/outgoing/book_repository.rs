// src/modules/book/application/ports/outgoing/book_repository.rs

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::auth::application::domain::entities::UserId;
use crate::modules::book::application::ports::outgoing::book_query::BookView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookData {
    pub created_by: UserId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: Option<String>,
    pub published_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookRepositoryError {
    #[error("Creating user does not exist")]
    CreatorNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn create_book(&self, data: CreateBookData) -> Result<BookView, BookRepositoryError>;
}
