use async_trait::async_trait;

use crate::modules::book::application::ports::incoming::use_cases::{
    GetBooksError, GetBooksUseCase,
};
use crate::modules::book::application::ports::outgoing::{BookListFilter, BookQuery, BookView};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub struct GetBooksService<Q>
where
    Q: BookQuery,
{
    query: Q,
}

impl<Q> GetBooksService<Q>
where
    Q: BookQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBooksUseCase for GetBooksService<Q>
where
    Q: BookQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: BookListFilter,
        page: PageRequest,
    ) -> Result<PageResult<BookView>, GetBooksError> {
        self.query
            .list(filter, page)
            .await
            .map_err(|e| GetBooksError::QueryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::book::application::ports::outgoing::BookQueryError;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[derive(Clone, Default)]
    struct RecordingBookQuery {
        fail: bool,
        seen: Arc<Mutex<Option<(BookListFilter, PageRequest)>>>,
    }

    #[async_trait]
    impl BookQuery for RecordingBookQuery {
        async fn get_by_id(&self, _book_id: Uuid) -> Result<BookView, BookQueryError> {
            unimplemented!("not used in GetBooksService tests")
        }

        async fn exists(&self, _book_id: Uuid) -> Result<bool, BookQueryError> {
            unimplemented!("not used in GetBooksService tests")
        }

        async fn list(
            &self,
            filter: BookListFilter,
            page: PageRequest,
        ) -> Result<PageResult<BookView>, BookQueryError> {
            if self.fail {
                return Err(BookQueryError::DatabaseError("timeout".into()));
            }
            *self.seen.lock().unwrap() = Some((filter, page));
            Ok(PageResult::new(vec![], page, 0))
        }
    }

    #[tokio::test]
    async fn passes_filter_and_page_through() {
        let query = RecordingBookQuery::default();
        let seen = query.seen.clone();
        let service = GetBooksService::new(query);

        let filter = BookListFilter::by_author_and_genre(Some("Rowling".into()), None);
        let page = PageRequest::new(2, 5);
        let result = service.execute(filter.clone(), page).await.unwrap();

        assert_eq!(result.page, 2);
        assert_eq!(result.limit, 5);
        assert_eq!(seen.lock().unwrap().clone(), Some((filter, page)));
    }

    #[tokio::test]
    async fn query_failure_is_reported() {
        let service = GetBooksService::new(RecordingBookQuery {
            fail: true,
            ..Default::default()
        });

        let result = service
            .execute(BookListFilter::default(), PageRequest::new(1, 10))
            .await;

        assert!(matches!(result, Err(GetBooksError::QueryFailed(_))));
    }
}
