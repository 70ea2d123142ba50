use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN_TYPE, REFRESH_TOKEN_TYPE,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKeys {
    fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// HS256 token service. Access and refresh tokens are signed with
/// separate secrets, so one kind can never be verified as the other.
#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    access_keys: SigningKeys,
    refresh_keys: SigningKeys,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let access_keys = SigningKeys::from_secret(&config.access_secret);
        let refresh_keys = SigningKeys::from_secret(&config.refresh_secret);

        Self {
            config,
            access_keys,
            refresh_keys,
        }
    }

    fn generate_token(
        &self,
        user_id: Uuid,
        token_type: &str,
        expiry_seconds: i64,
        keys: &SigningKeys,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        let claims = TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            jti: Uuid::new_v4(),
            token_type: token_type.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(
        &self,
        token: &str,
        expected_type: &str,
        keys: &SigningKeys,
    ) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[&self.config.issuer]);

        let decoded = decode::<TokenClaims>(token, &keys.decoding, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;

            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token verification failed: Token expired");
                    TokenError::TokenExpired
                }
                ErrorKind::ImmatureSignature => {
                    tracing::warn!("Token verification failed: Token not yet valid");
                    TokenError::TokenNotYetValid
                }
                ErrorKind::InvalidSignature => {
                    tracing::warn!("Token verification failed: Invalid signature");
                    TokenError::InvalidSignature
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Token verification failed: Unexpected issuer");
                    TokenError::MalformedToken
                }
                ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                    tracing::warn!("Token verification failed: Malformed or invalid algorithm");
                    TokenError::MalformedToken
                }
                _ => {
                    tracing::warn!(error = %e, "Token verification failed");
                    TokenError::MalformedToken
                }
            }
        })?;

        if decoded.claims.token_type != expected_type {
            tracing::warn!(
                expected = expected_type,
                actual = %decoded.claims.token_type,
                "Token type mismatch"
            );
            return Err(TokenError::InvalidTokenType(expected_type.to_string()));
        }

        Ok(decoded.claims)
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.generate_token(
            user_id,
            ACCESS_TOKEN_TYPE,
            self.config.access_token_expiry,
            &self.access_keys,
        )
    }

    fn generate_refresh_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.generate_token(
            user_id,
            REFRESH_TOKEN_TYPE,
            self.config.refresh_token_expiry,
            &self.refresh_keys,
        )
    }

    fn verify_access_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.verify_token(token, ACCESS_TOKEN_TYPE, &self.access_keys)
    }

    fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.verify_token(token, REFRESH_TOKEN_TYPE, &self.refresh_keys)
    }
}
