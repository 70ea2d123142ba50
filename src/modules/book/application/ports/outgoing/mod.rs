pub mod book_query;
pub mod book_repository;

pub use book_query::{BookListFilter, BookQuery, BookQueryError, BookView};
pub use book_repository::{BookRepository, BookRepositoryError, CreateBookData};
