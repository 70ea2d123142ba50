#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use actix_web::web;
    use uuid::Uuid;

    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::ports::outgoing::TokenProvider;

    pub fn create_test_jwt_service() -> JwtTokenService {
        let jwt_config = JwtConfig {
            access_secret: "test_access_secret_key_for_testing_only".to_string(),
            refresh_secret: "test_refresh_secret_key_for_testing_only".to_string(),
            issuer: "book-review-api".to_string(),
            access_token_expiry: 3600,
            refresh_token_expiry: 86400,
        };
        JwtTokenService::new(jwt_config)
    }

    /// Token provider wrapped the way `main` registers it for the auth extractor.
    pub fn test_token_provider() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(create_test_jwt_service());
        web::Data::new(provider)
    }

    /// `Authorization` header value carrying a fresh access token for `user_id`.
    pub fn bearer_for(user_id: Uuid) -> String {
        let token = create_test_jwt_service()
            .generate_access_token(user_id)
            .expect("test access token");
        format!("Bearer {token}")
    }
}
