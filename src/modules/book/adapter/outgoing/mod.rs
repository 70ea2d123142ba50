mod book_query_postgres;
mod book_repository_postgres;
pub mod sea_orm_entity;

pub use book_query_postgres::BookQueryPostgres;
pub use book_repository_postgres::BookRepositoryPostgres;
