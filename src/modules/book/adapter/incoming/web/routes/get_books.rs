use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::book::adapter::incoming::web::routes::book_response::BookListResponse;
use crate::modules::book::application::ports::incoming::use_cases::DEFAULT_BOOKS_PAGE_LIMIT;
use crate::modules::book::application::ports::outgoing::BookListFilter;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetBooksQuery {
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 10, max 100)
    pub limit: Option<String>,
    /// Case-insensitive substring of the author
    pub author: Option<String>,
    /// Case-insensitive substring of the genre
    pub genre: Option<String>,
}

/// List books, newest first
#[utoipa::path(
    get,
    path = "/api/v1/books",
    tag = "books",
    security(("bearer_auth" = [])),
    params(GetBooksQuery),
    responses(
        (
            status = 200,
            description = "A page of books",
            body = inline(SuccessResponse<BookListResponse>)
        ),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/v1/books")]
pub async fn get_books_handler(
    _user: AuthenticatedUser,
    query: web::Query<GetBooksQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::from_query(
        query.page.as_deref(),
        query.limit.as_deref(),
        DEFAULT_BOOKS_PAGE_LIMIT,
    );
    let filter = BookListFilter::by_author_and_genre(query.author, query.genre);

    match data.book.get_list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(
            BookListResponse::from(result),
            "Books fetched successfully.",
        ),
        Err(e) => {
            error!(error = %e, "Failed to list books");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::modules::book::application::ports::incoming::use_cases::{
        GetBooksError, GetBooksUseCase,
    };
    use crate::modules::book::application::ports::outgoing::BookView;
    use crate::shared::pagination::PageResult;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::{bearer_for, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[derive(Clone, Default)]
    struct RecordingGetBooks {
        total: u64,
        seen: Arc<Mutex<Option<(BookListFilter, PageRequest)>>>,
    }

    #[async_trait]
    impl GetBooksUseCase for RecordingGetBooks {
        async fn execute(
            &self,
            filter: BookListFilter,
            page: PageRequest,
        ) -> Result<PageResult<BookView>, GetBooksError> {
            *self.seen.lock().unwrap() = Some((filter, page));
            let book = BookView {
                id: Uuid::new_v4(),
                title: "Harry Potter".into(),
                author: "J.K. Rowling".into(),
                genre: "Fantasy".into(),
                description: None,
                published_date: None,
                created_by: UserId::from(Uuid::new_v4()),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            };
            Ok(PageResult::new(vec![book], page, self.total))
        }
    }

    #[derive(Clone)]
    struct FailingGetBooks;

    #[async_trait]
    impl GetBooksUseCase for FailingGetBooks {
        async fn execute(
            &self,
            _filter: BookListFilter,
            _page: PageRequest,
        ) -> Result<PageResult<BookView>, GetBooksError> {
            Err(GetBooksError::QueryFailed("timeout".into()))
        }
    }

    #[actix_web::test]
    async fn test_get_books_applies_filters_and_pagination() {
        let use_case = RecordingGetBooks {
            total: 21,
            ..Default::default()
        };
        let seen = use_case.seen.clone();

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_get_books(use_case).build())
                .app_data(test_token_provider())
                .service(get_books_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/books?page=2&limit=10&author=rowling&genre=%20")
            .insert_header(("Authorization", bearer_for(Uuid::new_v4())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Books fetched successfully.");
        assert_eq!(body["data"]["totalBooks"], 21);
        assert_eq!(body["data"]["currentPage"], 2);
        assert_eq!(body["data"]["totalPages"], 3);
        assert_eq!(body["data"]["books"][0]["author"], "J.K. Rowling");

        let (filter, page) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(filter.author.as_deref(), Some("rowling"));
        assert!(filter.genre.is_none());
        assert_eq!(page, PageRequest::new(2, 10));
    }

    #[actix_web::test]
    async fn test_get_books_bad_pagination_falls_back_to_defaults() {
        let use_case = RecordingGetBooks::default();
        let seen = use_case.seen.clone();

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_get_books(use_case).build())
                .app_data(test_token_provider())
                .service(get_books_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/books?page=abc&limit=0")
            .insert_header(("Authorization", bearer_for(Uuid::new_v4())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let (_, page) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(page, PageRequest::new(1, DEFAULT_BOOKS_PAGE_LIMIT));
    }

    #[actix_web::test]
    async fn test_get_books_reports_capped_limit() {
        let use_case = RecordingGetBooks {
            total: 250,
            ..Default::default()
        };

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_get_books(use_case).build())
                .app_data(test_token_provider())
                .service(get_books_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/books?limit=500")
            .insert_header(("Authorization", bearer_for(Uuid::new_v4())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["limit"], 100);
        assert_eq!(body["data"]["totalPages"], 3);
    }

    #[actix_web::test]
    async fn test_get_books_huge_page_is_clamped() {
        let use_case = RecordingGetBooks::default();
        let seen = use_case.seen.clone();

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_get_books(use_case).build())
                .app_data(test_token_provider())
                .service(get_books_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/books?page=9223372036854775807&limit=5")
            .insert_header(("Authorization", bearer_for(Uuid::new_v4())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let (_, page) = seen.lock().unwrap().clone().unwrap();
        assert!(page.offset() <= i64::MAX as u64);
    }

    #[actix_web::test]
    async fn test_get_books_requires_authentication() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(test_token_provider())
                .service(get_books_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/books").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_get_books_query_failure() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_get_books(FailingGetBooks)
                        .build(),
                )
                .app_data(test_token_provider())
                .service(get_books_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/books")
            .insert_header(("Authorization", bearer_for(Uuid::new_v4())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
    }
}
