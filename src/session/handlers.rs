use axum::{extract::State, Extension, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::service::SessionService;
use super::types::{LoginRequest, SessionClaims, SessionResponse};
use crate::shared::{AppError, AppState};

/// HTTP handler for logging in
///
/// POST /session
/// Takes credentials, returns a JWT session token and the display name.
#[instrument(name = "login", skip(state, request))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let service = SessionService::new(
        Arc::clone(&state.session_repository),
        state.token_config.clone(),
    );
    let session = service.login(request).await?;

    info!(display_name = %session.display_name, "Session created successfully");
    Ok(Json(session))
}

/// HTTP handler for checking the current session
///
/// GET /session/validate (behind the JWT middleware)
#[instrument(name = "validate_session", skip(claims))]
pub async fn validate_session(Extension(claims): Extension<SessionClaims>) -> Json<SessionClaims> {
    Json(claims)
}
