use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::review::application::ports::outgoing::{
    CreateReviewData, PatchReviewData, ReviewRepository, ReviewRepositoryError, ReviewResult,
};
use crate::shared::db::{is_foreign_key_violation, is_unique_violation};

use super::sea_orm_entity::reviews::{self, ActiveModel as ReviewActiveModel, Column, Entity};

#[derive(Clone, Debug)]
pub struct ReviewRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn find_by_id(
        &self,
        review_id: Uuid,
    ) -> Result<Option<ReviewResult>, ReviewRepositoryError> {
        let review = Entity::find_by_id(review_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(review.map(map_to_result))
    }

    async fn exists_for(
        &self,
        book_id: Uuid,
        user_id: UserId,
    ) -> Result<bool, ReviewRepositoryError> {
        let count = Entity::find()
            .filter(Column::BookId.eq(book_id))
            .filter(Column::UserId.eq(user_id.value()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn create_review(
        &self,
        data: CreateReviewData,
    ) -> Result<ReviewResult, ReviewRepositoryError> {
        let active_review = ReviewActiveModel {
            id: Set(Uuid::new_v4()),
            book_id: Set(data.book_id),
            user_id: Set(data.user_id.value()),
            rating: Set(data.rating.value()),
            comment: Set(data.comment),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_review.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return ReviewRepositoryError::AlreadyExists;
            }
            if is_foreign_key_violation(&e) {
                return ReviewRepositoryError::BookNotFound;
            }
            map_db_err(e)
        })?;

        Ok(map_to_result(inserted))
    }

    async fn update_review(
        &self,
        review_id: Uuid,
        data: PatchReviewData,
    ) -> Result<ReviewResult, ReviewRepositoryError> {
        let existing = Entity::find_by_id(review_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ReviewRepositoryError::NotFound)?;

        let mut active: ReviewActiveModel = existing.into();

        if let Some(rating) = data.rating {
            active.rating = Set(rating.value());
        }

        if let Some(comment) = data.comment {
            active.comment = Set(Some(comment));
        }

        let updated = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ReviewRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        Ok(map_to_result(updated))
    }

    async fn delete_review(&self, review_id: Uuid) -> Result<(), ReviewRepositoryError> {
        let result = Entity::delete_by_id(review_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ReviewRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_to_result(model: reviews::Model) -> ReviewResult {
    ReviewResult {
        id: model.id,
        book_id: model.book_id,
        user_id: UserId::from(model.user_id),
        rating: model.rating,
        comment: model.comment,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ReviewRepositoryError {
    ReviewRepositoryError::DatabaseError(e.to_string())
}
