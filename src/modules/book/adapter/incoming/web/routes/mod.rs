pub mod book_response;
pub mod create_book;
pub mod get_book_details;
pub mod get_books;
pub mod search_books;

pub use book_response::{BookDetailsResponse, BookListResponse, BookResponse, BookReviewResponse};
pub use create_book::{create_book_handler, CreateBookRequest};
pub use get_book_details::get_book_details_handler;
pub use get_books::get_books_handler;
pub use search_books::search_books_handler;
