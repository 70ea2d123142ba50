pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, book, review};

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::{
    create_user::CreateUserUseCase, login_user::LoginUserUseCase, logout_user::LogoutUseCase,
    refresh_token::RefreshTokenUseCase,
};
use crate::book::adapter::outgoing::{BookQueryPostgres, BookRepositoryPostgres};
use crate::book::application::book_use_cases::BookUseCases;
use crate::book::application::service::{
    CreateBookService, GetBookDetailsService, GetBooksService, SearchBooksService,
};
use crate::review::adapter::outgoing::{ReviewQueryPostgres, ReviewRepositoryPostgres};
use crate::review::application::review_use_cases::ReviewUseCases;
use crate::review::application::service::{
    AddReviewService, DeleteReviewService, UpdateReviewService,
};
use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;
use crate::shared::db;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub book: BookUseCases,
    pub review: ReviewUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    AppConfig::load_dotenv();
    let config = AppConfig::from_env().context("invalid configuration")?;
    let server_url = config.bind_address();

    // Database connection
    let conn = db::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let book_repo = BookRepositoryPostgres::new(Arc::clone(&db_arc));
    let book_query = BookQueryPostgres::new(Arc::clone(&db_arc));
    let review_repo = ReviewRepositoryPostgres::new(Arc::clone(&db_arc));
    let review_query = ReviewQueryPostgres::new(Arc::clone(&db_arc));

    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(
        Argon2Hasher::from_settings(config.argon2).context("invalid argon2 parameters")?,
    );
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));

    // Users
    let auth = AuthUseCases {
        create_user: Arc::new(CreateUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&password_hasher),
        )),
        login: Arc::new(LoginUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&password_hasher),
            Arc::clone(&token_provider),
        )),
        logout: Arc::new(LogoutUseCase::new(user_repo.clone())),
        refresh: Arc::new(RefreshTokenUseCase::new(
            user_query,
            user_repo,
            Arc::clone(&token_provider),
        )),
    };

    // Books
    let book = BookUseCases {
        create: Arc::new(CreateBookService::new(book_repo)),
        get_list: Arc::new(GetBooksService::new(book_query.clone())),
        search: Arc::new(SearchBooksService::new(book_query.clone())),
        get_details: Arc::new(GetBookDetailsService::new(
            book_query.clone(),
            review_query,
        )),
    };

    // Reviews
    let review = ReviewUseCases {
        add: Arc::new(AddReviewService::new(review_repo.clone(), book_query)),
        update: Arc::new(UpdateReviewService::new(review_repo.clone())),
        delete: Arc::new(DeleteReviewService::new(review_repo)),
    };

    let state = AppState { auth, book, review };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);
    let openapi = ApiDoc::openapi();

    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {server_url}"))?
    .run()
    .await?;

    info!("Server stopped, closing database pool");
    if let Ok(conn) = Arc::try_unwrap(db_arc) {
        conn.close().await?;
    }

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Users
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    // Books: search must be registered before the `{book_id}` matcher
    cfg.service(crate::book::adapter::incoming::web::routes::create_book_handler);
    cfg.service(crate::book::adapter::incoming::web::routes::get_books_handler);
    cfg.service(crate::book::adapter::incoming::web::routes::search_books_handler);
    cfg.service(crate::book::adapter::incoming::web::routes::get_book_details_handler);
    // Reviews
    cfg.service(crate::review::adapter::incoming::web::routes::add_review_handler);
    cfg.service(crate::review::adapter::incoming::web::routes::update_review_handler);
    cfg.service(crate::review::adapter::incoming::web::routes::delete_review_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        error!(error = %e, "Application terminated");
        eprintln!("Error starting app: {e:#}");
    }
}
