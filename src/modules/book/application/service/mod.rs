mod create_book_service;
mod get_book_details_service;
mod get_books_service;
mod search_books_service;

pub use create_book_service::CreateBookService;
pub use get_book_details_service::GetBookDetailsService;
pub use get_books_service::GetBooksService;
pub use search_books_service::SearchBooksService;
