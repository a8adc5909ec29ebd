use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::config::AppConfig;
use crate::event::EventBus;
use crate::games::repository::{GameRepository, LocalGameRepository};
use crate::session::repository::SessionRepository;
use crate::session::token::TokenConfig;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub session_repository: Arc<dyn SessionRepository + Send + Sync>,
    /// The store submissions are written to: shared (memory/Postgres) or
    /// the local-only fallback, selected by configuration at startup.
    pub game_repository: Arc<dyn GameRepository + Send + Sync>,
    /// Always present so the dev tooling can inspect local saves even when
    /// the shared store is active.
    pub local_repository: Arc<LocalGameRepository>,
    pub event_bus: EventBus,
    pub token_config: TokenConfig,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(
        session_repository: Arc<dyn SessionRepository + Send + Sync>,
        game_repository: Arc<dyn GameRepository + Send + Sync>,
        local_repository: Arc<LocalGameRepository>,
        event_bus: EventBus,
        config: AppConfig,
    ) -> Self {
        Self {
            session_repository,
            game_repository,
            local_repository,
            event_bus,
            token_config: TokenConfig::new(),
            config,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("JWT error: {0}")]
    JwtError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::JwtError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            // The form keeps its draft on storage failure; the user retries
            // without re-entering anything, so the detail stays in the logs.
            AppError::StorageError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save game.".to_string(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
