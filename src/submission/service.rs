use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument};

use super::derive::derive_all;
use super::validate::{validate, ValidationReport};
use crate::event::{EventBus, GamesEvent};
use crate::games::models::{GameRecord, PlayerEntry};
use crate::games::repository::GameRepository;
use crate::shared::AppError;

#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The draft failed validation; the report carries every violation so
    /// the form can surface all of them at once.
    #[error("Game failed validation")]
    Invalid(ValidationReport),

    #[error(transparent)]
    App(#[from] AppError),
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        match self {
            SubmissionError::Invalid(report) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({
                    "error": "Game failed validation",
                    "report": report,
                })),
            )
                .into_response(),
            SubmissionError::App(err) => err.into_response(),
        }
    }
}

/// Service owning the authoring pipeline: derivation, validation, and the
/// submission gate in front of the configured store.
pub struct SubmissionService {
    repository: Arc<dyn GameRepository + Send + Sync>,
    event_bus: EventBus,
}

impl SubmissionService {
    pub fn new(repository: Arc<dyn GameRepository + Send + Sync>, event_bus: EventBus) -> Self {
        Self {
            repository,
            event_bus,
        }
    }

    /// The synchronous pipeline run after every mutation of the authoring
    /// list: recompute totals, then ranks, then validate. Returns the
    /// derived list together with the report; persists nothing.
    pub fn preview(&self, mut players: Vec<PlayerEntry>) -> (Vec<PlayerEntry>, ValidationReport) {
        derive_all(&mut players);
        let report = validate(&players);
        debug!(
            player_count = players.len(),
            clean = report.is_clean(),
            "Ran submission pipeline"
        );
        (players, report)
    }

    /// Gated submission. The pipeline re-runs here regardless of what the
    /// caller previously validated: the list may have been mutated since
    /// the last pass and no stale-validation window is tolerated.
    #[instrument(skip(self, players))]
    pub async fn submit(&self, players: Vec<PlayerEntry>) -> Result<GameRecord, SubmissionError> {
        let (players, report) = self.preview(players);
        if !report.is_clean() {
            info!(
                entries_with_errors = report.entries.len(),
                global_errors = report.global.len(),
                "Submission blocked by validation"
            );
            return Err(SubmissionError::Invalid(report));
        }

        let record = GameRecord {
            id: String::new(),
            players,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            is_local_only: false,
        };

        let stored = self.repository.append_game(&record).await?;
        info!(game_id = %stored.id, players = stored.players.len(), "Game recorded");

        self.event_bus.emit(GamesEvent::GameRecorded {
            record: stored.clone(),
        });

        Ok(stored)
    }
}
