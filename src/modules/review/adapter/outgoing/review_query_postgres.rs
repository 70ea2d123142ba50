use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::modules::review::application::ports::outgoing::{
    ReviewQuery, ReviewQueryError, ReviewStats, ReviewWithReviewer,
};
use crate::shared::pagination::PageRequest;

use super::sea_orm_entity::reviews::{Column, Entity, Relation};

// ============================================================================
// Row shapes
// ============================================================================

#[derive(Debug, FromQueryResult)]
struct RatingTotals {
    total: i64,
    rating_sum: Option<i64>,
}

/// Review columns plus the reviewer's public identity.
#[derive(Debug, FromQueryResult)]
struct ReviewRow {
    id: Uuid,
    user_id: Uuid,
    username: String,
    email: String,
    rating: i32,
    comment: Option<String>,
    created_at: DateTimeWithTimeZone,
    updated_at: DateTimeWithTimeZone,
}

impl From<ReviewRow> for ReviewWithReviewer {
    fn from(row: ReviewRow) -> Self {
        Self {
            id: row.id,
            user_id: UserId::from(row.user_id),
            username: row.username,
            email: row.email,
            rating: row.rating,
            comment: row.comment,
            created_at: row.created_at.into(),
            updated_at: row.updated_at.into(),
        }
    }
}

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ReviewQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewQuery for ReviewQueryPostgres {
    /// `SELECT COUNT(id), SUM(rating) FROM reviews WHERE book_id = $1`
    async fn stats_for_book(&self, book_id: Uuid) -> Result<ReviewStats, ReviewQueryError> {
        let totals = Entity::find()
            .select_only()
            .column_as(Expr::col(Column::Id).count(), "total")
            .column_as(Expr::col(Column::Rating).sum(), "rating_sum")
            .filter(Column::BookId.eq(book_id))
            .into_model::<RatingTotals>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(match totals {
            Some(t) => ReviewStats::from_totals(t.total.max(0) as u64, t.rating_sum.unwrap_or(0)),
            None => ReviewStats::empty(),
        })
    }

    async fn page_for_book(
        &self,
        book_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<ReviewWithReviewer>, ReviewQueryError> {
        let rows = Entity::find()
            .select_only()
            .column(Column::Id)
            .column(Column::UserId)
            .column(Column::Rating)
            .column(Column::Comment)
            .column(Column::CreatedAt)
            .column(Column::UpdatedAt)
            .column_as(users::Column::Username, "username")
            .column_as(users::Column::Email, "email")
            .join(JoinType::InnerJoin, Relation::Users.def())
            .filter(Column::BookId.eq(book_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .into_model::<ReviewRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(ReviewWithReviewer::from).collect())
    }
}

fn map_db_err(e: DbErr) -> ReviewQueryError {
    ReviewQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
