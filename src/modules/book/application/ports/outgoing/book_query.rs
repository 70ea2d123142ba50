// src/modules/book/application/ports/outgoing/book_query.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::pagination::{PageRequest, PageResult};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookView {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: Option<String>,
    pub published_date: Option<NaiveDate>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Case-insensitive substring filters. `None` means "no restriction".
/// `author` and `genre` combine with AND; `search` matches title, author
/// or genre.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookListFilter {
    pub author: Option<String>,
    pub genre: Option<String>,
    pub search: Option<String>,
}

impl BookListFilter {
    pub fn by_author_and_genre(author: Option<String>, genre: Option<String>) -> Self {
        Self {
            author: non_blank(author),
            genre: non_blank(genre),
            search: None,
        }
    }

    pub fn search(term: &str) -> Self {
        Self {
            search: non_blank(Some(term.to_string())),
            ..Self::default()
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookQueryError {
    #[error("Book not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait BookQuery: Send + Sync {
    async fn get_by_id(&self, book_id: Uuid) -> Result<BookView, BookQueryError>;

    async fn exists(&self, book_id: Uuid) -> Result<bool, BookQueryError>;

    /// Newest first.
    async fn list(
        &self,
        filter: BookListFilter,
        page: PageRequest,
    ) -> Result<PageResult<BookView>, BookQueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filters_are_dropped() {
        let filter = BookListFilter::by_author_and_genre(Some("  ".into()), Some(" Fantasy ".into()));
        assert_eq!(filter.author, None);
        assert_eq!(filter.genre.as_deref(), Some("Fantasy"));
        assert_eq!(filter.search, None);
    }

    #[test]
    fn search_filter_only_sets_search() {
        let filter = BookListFilter::search(" dune ");
        assert_eq!(filter.search.as_deref(), Some("dune"));
        assert!(filter.author.is_none() && filter.genre.is_none());
    }
}
