use async_trait::async_trait;

use crate::modules::book::application::ports::incoming::use_cases::{
    SearchBooksError, SearchBooksUseCase,
};
use crate::modules::book::application::ports::outgoing::{BookListFilter, BookQuery, BookView};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub struct SearchBooksService<Q>
where
    Q: BookQuery,
{
    query: Q,
}

impl<Q> SearchBooksService<Q>
where
    Q: BookQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> SearchBooksUseCase for SearchBooksService<Q>
where
    Q: BookQuery + Send + Sync,
{
    async fn execute(
        &self,
        term: &str,
        page: PageRequest,
    ) -> Result<PageResult<BookView>, SearchBooksError> {
        let filter = BookListFilter::search(term);
        if filter.search.is_none() {
            return Err(SearchBooksError::MissingQuery);
        }

        self.query
            .list(filter, page)
            .await
            .map_err(|e| SearchBooksError::QueryFailed(e.to_string()))
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
        seen: Arc<Mutex<Option<BookListFilter>>>,
    }

    #[async_trait]
    impl BookQuery for RecordingBookQuery {
        async fn get_by_id(&self, _book_id: Uuid) -> Result<BookView, BookQueryError> {
            unimplemented!("not used in SearchBooksService tests")
        }

        async fn exists(&self, _book_id: Uuid) -> Result<bool, BookQueryError> {
            unimplemented!("not used in SearchBooksService tests")
        }

        async fn list(
            &self,
            filter: BookListFilter,
            page: PageRequest,
        ) -> Result<PageResult<BookView>, BookQueryError> {
            *self.seen.lock().unwrap() = Some(filter);
            Ok(PageResult::new(vec![], page, 0))
        }
    }

    #[tokio::test]
    async fn blank_term_is_rejected_without_querying() {
        let query = RecordingBookQuery::default();
        let seen = query.seen.clone();
        let service = SearchBooksService::new(query);

        let result = service.execute("   ", PageRequest::new(1, 10)).await;

        assert_eq!(result.unwrap_err(), SearchBooksError::MissingQuery);
        assert!(seen.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn term_becomes_search_filter() {
        let query = RecordingBookQuery::default();
        let seen = query.seen.clone();
        let service = SearchBooksService::new(query);

        service
            .execute(" harry ", PageRequest::new(1, 10))
            .await
            .unwrap();

        let filter = seen.lock().unwrap().clone().unwrap();
        assert_eq!(filter.search.as_deref(), Some("harry"));
        assert!(filter.author.is_none());
    }
}
