mod create_book;
mod get_book_details;
mod get_books;
mod search_books;

pub use create_book::{
    CreateBookCommand, CreateBookCommandError, CreateBookError, CreateBookUseCase,
};
pub use get_book_details::{
    BookDetails, GetBookDetailsError, GetBookDetailsUseCase, DEFAULT_REVIEWS_PAGE_LIMIT,
};
pub use get_books::{GetBooksError, GetBooksUseCase, DEFAULT_BOOKS_PAGE_LIMIT};
pub use search_books::{SearchBooksError, SearchBooksUseCase};
