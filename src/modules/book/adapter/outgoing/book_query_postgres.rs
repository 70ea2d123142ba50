// src/modules/book/adapter/outgoing/book_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::book::adapter::outgoing::sea_orm_entity::books::{self, Column, Entity};
use crate::modules::book::application::ports::outgoing::{
    BookListFilter, BookQuery, BookQueryError, BookView,
};
use crate::shared::pagination::{PageRequest, PageResult};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct BookQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BookQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookQuery for BookQueryPostgres {
    async fn get_by_id(&self, book_id: Uuid) -> Result<BookView, BookQueryError> {
        let book = Entity::find_by_id(book_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(BookQueryError::NotFound)?;

        Ok(model_to_view(book))
    }

    async fn exists(&self, book_id: Uuid) -> Result<bool, BookQueryError> {
        let count = Entity::find_by_id(book_id)
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn list(
        &self,
        filter: BookListFilter,
        page: PageRequest,
    ) -> Result<PageResult<BookView>, BookQueryError> {
        let query = Entity::find()
            .filter(filter_condition(&filter))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let books = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(
            books.into_iter().map(model_to_view).collect(),
            page,
            total,
        ))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// `author` and `genre` narrow together; `search` matches any of the three
/// text columns.
fn filter_condition(filter: &BookListFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(author) = &filter.author {
        condition = condition.add(Expr::col(Column::Author).ilike(contains_pattern(author)));
    }

    if let Some(genre) = &filter.genre {
        condition = condition.add(Expr::col(Column::Genre).ilike(contains_pattern(genre)));
    }

    if let Some(term) = &filter.search {
        let pattern = contains_pattern(term);
        condition = condition.add(
            Condition::any()
                .add(Expr::col(Column::Title).ilike(pattern.clone()))
                .add(Expr::col(Column::Author).ilike(pattern.clone()))
                .add(Expr::col(Column::Genre).ilike(pattern)),
        );
    }

    condition
}

/// `%term%` with LIKE metacharacters escaped so user input matches literally.
fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.trim().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

pub(crate) fn model_to_view(model: books::Model) -> BookView {
    BookView {
        id: model.id,
        title: model.title,
        author: model.author,
        genre: model.genre,
        description: model.description,
        published_date: model.published_date,
        created_by: UserId::from(model.created_by),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> BookQueryError {
    BookQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
