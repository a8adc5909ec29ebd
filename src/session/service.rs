use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::models::SessionModel;
use super::repository::SessionRepository;
use super::token::TokenConfig;
use super::types::{LoginRequest, SessionClaims, SessionResponse};
use crate::shared::AppError;

/// Service for handling login and session validation.
///
/// The group runs on shared trust: credentials must be present, but actual
/// verification is delegated to the identity provider configured in front
/// of this service (dev deployments accept any non-empty pair). Only the
/// resulting display name flows into the rest of the app.
pub struct SessionService {
    repository: Arc<dyn SessionRepository + Send + Sync>,
    token_config: TokenConfig,
}

impl SessionService {
    pub fn new(
        repository: Arc<dyn SessionRepository + Send + Sync>,
        token_config: TokenConfig,
    ) -> Self {
        Self {
            repository,
            token_config,
        }
    }

    #[instrument(skip(self, request))]
    pub async fn login(&self, request: LoginRequest) -> Result<SessionResponse, AppError> {
        let name = request.name.trim();
        if name.is_empty() || request.password.trim().is_empty() {
            warn!("Login attempt with missing credentials");
            return Err(AppError::Unauthorized(
                "Name and password are required".to_string(),
            ));
        }

        let session = SessionModel::new(name.to_string(), self.token_config.expiration_days);
        self.repository.create_session(&session).await?;

        let token = self
            .token_config
            .create_token(session.id.clone(), session.display_name.clone())?;

        info!(display_name = %session.display_name, "Login successful");

        Ok(SessionResponse {
            session_id: token,
            display_name: session.display_name,
        })
    }

    /// Checks the token signature and that the referenced session still
    /// exists and has not expired.
    #[instrument(skip(self, token))]
    pub async fn validate_session(&self, token: &str) -> Result<SessionClaims, AppError> {
        let claims = self.token_config.validate_token(token)?;

        let session = self
            .repository
            .get_session(&claims.session_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Session not found".to_string()))?;

        if session.is_expired() {
            warn!(session_id = %session.id, "Rejected expired session");
            return Err(AppError::Unauthorized("Session expired".to_string()));
        }

        Ok(claims)
    }
}
