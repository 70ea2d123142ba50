use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::cookies::{set_token_cookies, REFRESH_TOKEN_COOKIE};
use crate::auth::application::use_cases::refresh_token::{RefreshTokenError, RefreshTokenRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{http::StatusCode, post, web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Refresh token request from client. The body is optional; the
/// `refreshToken` cookie is used when it carries no token.
#[derive(Deserialize, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequestDto {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponseBody {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    refresh_token: String,
}

/// Rotate tokens
///
/// Exchanges the current refresh token for a new access/refresh pair. The
/// presented token stops working once the pair is issued.
#[utoipa::path(
    post,
    path = "/api/v1/users/refresh-token",
    tag = "users",
    request_body(content = RefreshTokenRequestDto, description = "Optional when the refreshToken cookie is sent"),
    responses(
        (
            status = 200,
            description = "Tokens rotated",
            body = inline(SuccessResponse<RefreshTokenResponseBody>),
            example = json!({
                "status": 200,
                "success": true,
                "data": {
                    "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "refreshToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
                },
                "message": "Access token refreshed."
            })
        ),
        (
            status = 401,
            description = "Missing, invalid, expired or revoked refresh token",
            body = ErrorResponse,
            example = json!({
                "status": 401,
                "success": false,
                "code": "INVALID_REFRESH_TOKEN",
                "message": "Refresh token has been revoked or already used."
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/v1/users/refresh-token")]
pub async fn refresh_token_handler(
    req: HttpRequest,
    body: Option<web::Json<RefreshTokenRequestDto>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let from_body = body.and_then(|b| b.into_inner().refresh_token);
    let token = from_body
        .filter(|t| !t.trim().is_empty())
        .or_else(|| req.cookie(REFRESH_TOKEN_COOKIE).map(|c| c.value().to_string()));

    let request = match RefreshTokenRequest::new(token) {
        Ok(request) => request,
        Err(e) => {
            return ApiResponse::unauthorized("UNAUTHORIZED", &e.to_string());
        }
    };

    match data.auth.refresh.execute(request).await {
        Ok(tokens) => {
            info!("Refresh token exchanged");

            let mut builder = HttpResponse::Ok();
            set_token_cookies(&mut builder, &tokens);
            builder.json(ApiResponse::new(
                StatusCode::OK,
                RefreshTokenResponseBody {
                    access_token: tokens.access_token,
                    refresh_token: tokens.refresh_token,
                },
                "Access token refreshed.",
            ))
        }

        Err(
            e @ (RefreshTokenError::TokenExpired
            | RefreshTokenError::TokenInvalid
            | RefreshTokenError::TokenRevoked
            | RefreshTokenError::UserNotFound),
        ) => {
            warn!(error = %e, "Refresh token rejected");
            ApiResponse::unauthorized("INVALID_REFRESH_TOKEN", &e.to_string())
        }

        Err(e) => {
            error!(error = %e, "Refresh token exchange failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::TokenPair;
    use crate::auth::application::use_cases::refresh_token::IRefreshTokenUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{cookie::Cookie, test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct EchoRefresh {
        seen: Arc<Mutex<Option<String>>>,
    }

    #[async_trait]
    impl IRefreshTokenUseCase for EchoRefresh {
        async fn execute(
            &self,
            request: RefreshTokenRequest,
        ) -> Result<TokenPair, RefreshTokenError> {
            *self.seen.lock().unwrap() = Some(request.refresh_token().to_string());
            Ok(TokenPair {
                access_token: "new-access".to_string(),
                refresh_token: "new-refresh".to_string(),
            })
        }
    }

    #[derive(Clone)]
    struct RevokedRefresh;

    #[async_trait]
    impl IRefreshTokenUseCase for RevokedRefresh {
        async fn execute(
            &self,
            _request: RefreshTokenRequest,
        ) -> Result<TokenPair, RefreshTokenError> {
            Err(RefreshTokenError::TokenRevoked)
        }
    }

    #[actix_web::test]
    async fn test_refresh_with_body_token() {
        let uc = EchoRefresh::default();
        let seen = uc.seen.clone();

        let app_state = TestAppStateBuilder::default().with_refresh_token(uc).build();
        let app =
            test::init_service(App::new().app_data(app_state).service(refresh_token_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users/refresh-token")
            .set_json(serde_json::json!({ "refreshToken": "old-refresh" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(seen.lock().unwrap().as_deref(), Some("old-refresh"));

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["accessToken"], "new-access");
        assert_eq!(body["data"]["refreshToken"], "new-refresh");
    }

    #[actix_web::test]
    async fn test_refresh_falls_back_to_cookie() {
        let uc = EchoRefresh::default();
        let seen = uc.seen.clone();

        let app_state = TestAppStateBuilder::default().with_refresh_token(uc).build();
        let app =
            test::init_service(App::new().app_data(app_state).service(refresh_token_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users/refresh-token")
            .cookie(Cookie::new(REFRESH_TOKEN_COOKIE, "cookie-refresh"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(seen.lock().unwrap().as_deref(), Some("cookie-refresh"));
    }

    #[actix_web::test]
    async fn test_refresh_without_token_is_unauthorized() {
        let app_state = TestAppStateBuilder::default()
            .with_refresh_token(EchoRefresh::default())
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(refresh_token_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users/refresh-token")
            .set_json(serde_json::json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_refresh_revoked_token_is_unauthorized() {
        let app_state = TestAppStateBuilder::default()
            .with_refresh_token(RevokedRefresh)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(refresh_token_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users/refresh-token")
            .set_json(serde_json::json!({ "refreshToken": "stale" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "INVALID_REFRESH_TOKEN");
    }
}
