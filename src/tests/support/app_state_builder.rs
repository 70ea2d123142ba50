use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::{
    create_user::ICreateUserUseCase, login_user::ILoginUserUseCase, logout_user::ILogoutUseCase,
    refresh_token::IRefreshTokenUseCase,
};
use crate::book::application::book_use_cases::BookUseCases;
use crate::book::application::ports::incoming::use_cases::{
    CreateBookUseCase, GetBookDetailsUseCase, GetBooksUseCase, SearchBooksUseCase,
};
use crate::review::application::ports::incoming::use_cases::{
    AddReviewUseCase, DeleteReviewUseCase, UpdateReviewUseCase,
};
use crate::review::application::review_use_cases::ReviewUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    book: BookUseCases,
    review: ReviewUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                create_user: Arc::new(StubCreateUserUseCase),
                login: Arc::new(StubLoginUserUseCase),
                logout: Arc::new(StubLogoutUserUseCase),
                refresh: Arc::new(StubRefreshTokenUseCase),
            },
            book: BookUseCases {
                create: Arc::new(StubCreateBookUseCase),
                get_list: Arc::new(StubGetBooksUseCase),
                search: Arc::new(StubSearchBooksUseCase),
                get_details: Arc::new(StubGetBookDetailsUseCase),
            },
            review: ReviewUseCases {
                add: Arc::new(StubAddReviewUseCase),
                update: Arc::new(StubUpdateReviewUseCase),
                delete: Arc::new(StubDeleteReviewUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // Users

    pub fn with_create_user(mut self, uc: impl ICreateUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.create_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_logout_user(mut self, uc: impl ILogoutUseCase + Send + Sync + 'static) -> Self {
        self.auth.logout = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl IRefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.refresh = Arc::new(uc);
        self
    }

    // Books

    pub fn with_create_book(mut self, uc: impl CreateBookUseCase + Send + Sync + 'static) -> Self {
        self.book.create = Arc::new(uc);
        self
    }

    pub fn with_get_books(mut self, uc: impl GetBooksUseCase + Send + Sync + 'static) -> Self {
        self.book.get_list = Arc::new(uc);
        self
    }

    pub fn with_search_books(
        mut self,
        uc: impl SearchBooksUseCase + Send + Sync + 'static,
    ) -> Self {
        self.book.search = Arc::new(uc);
        self
    }

    pub fn with_get_book_details(
        mut self,
        uc: impl GetBookDetailsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.book.get_details = Arc::new(uc);
        self
    }

    // Reviews

    pub fn with_add_review(mut self, uc: impl AddReviewUseCase + Send + Sync + 'static) -> Self {
        self.review.add = Arc::new(uc);
        self
    }

    pub fn with_update_review(
        mut self,
        uc: impl UpdateReviewUseCase + Send + Sync + 'static,
    ) -> Self {
        self.review.update = Arc::new(uc);
        self
    }

    pub fn with_delete_review(
        mut self,
        uc: impl DeleteReviewUseCase + Send + Sync + 'static,
    ) -> Self {
        self.review.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            book: self.book,
            review: self.review,
        })
    }
}
