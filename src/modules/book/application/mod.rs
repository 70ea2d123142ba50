pub mod book_use_cases;
pub mod ports;
pub mod service;
