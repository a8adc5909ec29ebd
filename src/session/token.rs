use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, instrument};

use super::types::SessionClaims;
use crate::shared::AppError;

/// Configuration for JWT session tokens
#[derive(Clone)]
pub struct TokenConfig {
    secret: String,
    pub expiration_days: i64,
}

impl TokenConfig {
    pub fn new() -> Self {
        let expiration_days = std::env::var("SESSION_EXPIRATION_DAYS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        Self {
            secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "change-me-in-production".to_string()),
            expiration_days,
        }
    }

    /// Creates a signed token carrying the session id and display name.
    #[instrument(skip(self, session_id, display_name))]
    pub fn create_token(
        &self,
        session_id: String,
        display_name: String,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = SessionClaims {
            session_id,
            display_name,
            exp: (now + Duration::days(self.expiration_days)).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|e| {
            debug!(error = %e, "Failed to encode JWT token");
            AppError::JwtError(e.to_string())
        })
    }

    /// Validates a token's signature and expiry, returning its claims.
    #[instrument(skip(self, token))]
    pub fn validate_token(&self, token: &str) -> Result<SessionClaims, AppError> {
        decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| {
            debug!(error = %e, "Failed to decode JWT token");
            AppError::JwtError(e.to_string())
        })
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self::new()
    }
}
