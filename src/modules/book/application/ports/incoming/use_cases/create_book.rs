use async_trait::async_trait;
use chrono::NaiveDate;

use crate::auth::application::domain::entities::UserId;
use crate::modules::book::application::ports::outgoing::{BookView, CreateBookData};

pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_AUTHOR_LEN: usize = 255;
pub const MAX_GENRE_LEN: usize = 100;

//
// ──────────────────────────────────────────────────────────
// Create Book Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateBookCommand {
    data: CreateBookData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateBookCommandError {
    #[error("Missing required fields. Title, author, and genre must be provided.")]
    MissingRequiredFields,

    #[error("{field} must be at most {max} characters.")]
    TooLong { field: &'static str, max: usize },

    #[error("Published date must be a valid date in YYYY-MM-DD format.")]
    InvalidPublishedDate,
}

impl CreateBookCommand {
    pub fn new(
        created_by: UserId,
        title: Option<String>,
        author: Option<String>,
        genre: Option<String>,
        description: Option<String>,
        published_date: Option<String>,
    ) -> Result<Self, CreateBookCommandError> {
        let (title, author, genre) = match (trimmed(title), trimmed(author), trimmed(genre)) {
            (Some(t), Some(a), Some(g)) => (t, a, g),
            _ => return Err(CreateBookCommandError::MissingRequiredFields),
        };

        check_len("Title", &title, MAX_TITLE_LEN)?;
        check_len("Author", &author, MAX_AUTHOR_LEN)?;
        check_len("Genre", &genre, MAX_GENRE_LEN)?;

        let published_date = match trimmed(published_date) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| CreateBookCommandError::InvalidPublishedDate)?,
            ),
            None => None,
        };

        Ok(Self {
            data: CreateBookData {
                created_by,
                title,
                author,
                genre,
                description: trimmed(description),
                published_date,
            },
        })
    }

    pub fn created_by(&self) -> UserId {
        self.data.created_by
    }

    pub fn title(&self) -> &str {
        &self.data.title
    }

    pub fn into_data(self) -> CreateBookData {
        self.data
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), CreateBookCommandError> {
    if value.chars().count() > max {
        return Err(CreateBookCommandError::TooLong { field, max });
    }
    Ok(())
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateBookError {
    #[error("Creating user no longer exists")]
    CreatorNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateBookUseCase: Send + Sync {
    async fn execute(&self, command: CreateBookCommand) -> Result<BookView, CreateBookError>;
}
