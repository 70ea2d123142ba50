//! Default use case doubles for `TestAppStateBuilder`. Route tests swap in
//! their own implementation for the use case under test.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserProfile};
use crate::auth::application::ports::outgoing::TokenPair;
use crate::auth::application::use_cases::{
    create_user::{CreateUserError, CreateUserInput, ICreateUserUseCase},
    login_user::{ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse},
    logout_user::{ILogoutUseCase, LogoutError},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenError, RefreshTokenRequest},
};
use crate::book::application::ports::incoming::use_cases::{
    BookDetails, CreateBookCommand, CreateBookError, CreateBookUseCase, GetBookDetailsError,
    GetBookDetailsUseCase, GetBooksError, GetBooksUseCase, SearchBooksError, SearchBooksUseCase,
};
use crate::book::application::ports::outgoing::{BookListFilter, BookView};
use crate::review::application::ports::incoming::use_cases::{
    AddReviewCommand, AddReviewError, AddReviewUseCase, DeleteReviewCommand, DeleteReviewError,
    DeleteReviewUseCase, UpdateReviewCommand, UpdateReviewError, UpdateReviewUseCase,
};
use crate::review::application::ports::outgoing::ReviewResult;
use crate::shared::pagination::{PageRequest, PageResult};

// ============================================================================
// Users
// ============================================================================

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _input: CreateUserInput) -> Result<UserProfile, CreateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutUserUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUserUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<(), LogoutError> {
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct StubRefreshTokenUseCase;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _request: RefreshTokenRequest,
    ) -> Result<TokenPair, RefreshTokenError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Books
// ============================================================================

#[derive(Default, Clone)]
pub struct StubCreateBookUseCase;

#[async_trait]
impl CreateBookUseCase for StubCreateBookUseCase {
    async fn execute(&self, _command: CreateBookCommand) -> Result<BookView, CreateBookError> {
        unimplemented!("Not used in this test")
    }
}

/// Always answers with an empty page.
#[derive(Default, Clone)]
pub struct StubGetBooksUseCase;

#[async_trait]
impl GetBooksUseCase for StubGetBooksUseCase {
    async fn execute(
        &self,
        _filter: BookListFilter,
        page: PageRequest,
    ) -> Result<PageResult<BookView>, GetBooksError> {
        Ok(PageResult::new(vec![], page, 0))
    }
}

/// Always answers with an empty page.
#[derive(Default, Clone)]
pub struct StubSearchBooksUseCase;

#[async_trait]
impl SearchBooksUseCase for StubSearchBooksUseCase {
    async fn execute(
        &self,
        _term: &str,
        page: PageRequest,
    ) -> Result<PageResult<BookView>, SearchBooksError> {
        Ok(PageResult::new(vec![], page, 0))
    }
}

#[derive(Default, Clone)]
pub struct StubGetBookDetailsUseCase;

#[async_trait]
impl GetBookDetailsUseCase for StubGetBookDetailsUseCase {
    async fn execute(
        &self,
        _book_id: Uuid,
        _page: PageRequest,
    ) -> Result<BookDetails, GetBookDetailsError> {
        Err(GetBookDetailsError::NotFound)
    }
}

// ============================================================================
// Reviews
// ============================================================================

#[derive(Default, Clone)]
pub struct StubAddReviewUseCase;

#[async_trait]
impl AddReviewUseCase for StubAddReviewUseCase {
    async fn execute(&self, _command: AddReviewCommand) -> Result<ReviewResult, AddReviewError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateReviewUseCase;

#[async_trait]
impl UpdateReviewUseCase for StubUpdateReviewUseCase {
    async fn execute(
        &self,
        _command: UpdateReviewCommand,
    ) -> Result<ReviewResult, UpdateReviewError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteReviewUseCase;

#[async_trait]
impl DeleteReviewUseCase for StubDeleteReviewUseCase {
    async fn execute(&self, _command: DeleteReviewCommand) -> Result<(), DeleteReviewError> {
        Err(DeleteReviewError::NotFound)
    }
}
