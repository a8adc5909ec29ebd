use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::{instrument, warn};

use super::service::SessionService;
use crate::shared::{AppError, AppState};

/// JWT authentication middleware - validates the Authorization Bearer
/// header and adds SessionClaims to the request.
/// Usage: .layer(middleware::from_fn_with_state(app_state.clone(), session::jwt_auth))
/// Handlers can then extract Extension(claims): Extension<SessionClaims>.
#[instrument(skip(state, req, next))]
pub async fn jwt_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| {
            warn!("Missing Authorization header in request");
            AppError::Unauthorized("Missing authorization header".to_string())
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("Invalid Authorization header format (expected Bearer token)");
        AppError::Unauthorized("Invalid authorization header format".to_string())
    })?;

    let service = SessionService::new(
        Arc::clone(&state.session_repository),
        state.token_config.clone(),
    );
    let claims = service.validate_session(token).await.map_err(|e| {
        warn!("JWT authentication failed: {}", e);
        e
    })?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
