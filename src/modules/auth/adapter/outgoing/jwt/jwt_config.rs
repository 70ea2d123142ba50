use crate::shared::config::{parse_or, required, ConfigError};

/// HS256 needs a key of at least 32 bytes.
pub const MIN_SECRET_LEN: usize = 32;

#[derive(Clone)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub issuer: String,
    pub access_token_expiry: i64,  // Expiration in seconds
    pub refresh_token_expiry: i64, // Expiration in seconds
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("access_secret", &"***")
            .field("refresh_secret", &"***")
            .field("issuer", &self.issuer)
            .field("access_token_expiry", &self.access_token_expiry)
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .finish()
    }
}

impl JwtConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_secret = required(lookup, "ACCESS_TOKEN_SECRET")?;
        let refresh_secret = required(lookup, "REFRESH_TOKEN_SECRET")?;

        for (key, secret) in [
            ("ACCESS_TOKEN_SECRET", &access_secret),
            ("REFRESH_TOKEN_SECRET", &refresh_secret),
        ] {
            if secret.len() < MIN_SECRET_LEN {
                return Err(ConfigError::Invalid {
                    key,
                    reason: format!("must be at least {MIN_SECRET_LEN} characters"),
                });
            }
        }

        if access_secret == refresh_secret {
            return Err(ConfigError::Invalid {
                key: "REFRESH_TOKEN_SECRET",
                reason: "must differ from ACCESS_TOKEN_SECRET".to_string(),
            });
        }

        let access_token_expiry = parse_or(lookup, "ACCESS_TOKEN_EXPIRY", 86_400i64)?;
        let refresh_token_expiry = parse_or(lookup, "REFRESH_TOKEN_EXPIRY", 864_000i64)?;

        if access_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                key: "ACCESS_TOKEN_EXPIRY",
                reason: "must be positive".to_string(),
            });
        }

        if refresh_token_expiry <= access_token_expiry {
            return Err(ConfigError::Invalid {
                key: "REFRESH_TOKEN_EXPIRY",
                reason: "must be greater than ACCESS_TOKEN_EXPIRY".to_string(),
            });
        }

        let issuer = lookup("JWT_ISSUER")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "book-review-api".to_string());

        Ok(Self {
            access_secret,
            refresh_secret,
            issuer,
            access_token_expiry,
            refresh_token_expiry,
        })
    }
}
