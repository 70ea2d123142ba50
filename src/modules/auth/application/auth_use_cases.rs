use std::sync::Arc;

use crate::auth::application::use_cases::{
    create_user::ICreateUserUseCase, login_user::ILoginUserUseCase, logout_user::ILogoutUseCase,
    refresh_token::IRefreshTokenUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub create_user: Arc<dyn ICreateUserUseCase + Send + Sync>,
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub logout: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub refresh: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
}
