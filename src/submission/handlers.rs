use axum::{
    extract::{Query, State},
    Extension, Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::corporations;
use super::service::{SubmissionError, SubmissionService};
use super::types::{CorporationInfo, CorporationQuery, DraftRequest, PreviewResponse};
use crate::games::models::GameRecord;
use crate::session::SessionClaims;
use crate::shared::AppState;

/// HTTP handler for the authoring pipeline
///
/// POST /games/preview
/// Derives totals and ranks for the draft and reports every validation
/// violation. Persists nothing; the form calls this after each edit.
#[instrument(name = "preview_game", skip(state, request))]
pub async fn preview_game(
    State(state): State<AppState>,
    Json(request): Json<DraftRequest>,
) -> Json<PreviewResponse> {
    let service = SubmissionService::new(
        Arc::clone(&state.game_repository),
        state.event_bus.clone(),
    );
    let (players, report) = service.preview(request.players);
    Json(PreviewResponse { players, report })
}

/// HTTP handler for submitting a finished game
///
/// POST /games
/// Re-runs the pipeline, gates on a clean report, appends to the
/// configured store and returns the stored record.
#[instrument(name = "submit_game", skip(state, claims, request))]
pub async fn submit_game(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    Json(request): Json<DraftRequest>,
) -> Result<Json<GameRecord>, SubmissionError> {
    info!(
        submitted_by = %claims.display_name,
        player_count = request.players.len(),
        "Submitting game"
    );

    let service = SubmissionService::new(
        Arc::clone(&state.game_repository),
        state.event_bus.clone(),
    );
    let stored = service.submit(request.players).await?;

    info!(game_id = %stored.id, "Game submitted successfully");
    Ok(Json(stored))
}

/// HTTP handler for the corporation reference list
///
/// GET /corporations?q=thar&taken=Helion,Ecoline
/// Search plus the availability hint for the current draft.
#[instrument(name = "list_corporations", skip(_state))]
pub async fn list_corporations(
    State(_state): State<AppState>,
    Query(query): Query<CorporationQuery>,
) -> Json<Vec<CorporationInfo>> {
    let taken: Vec<String> = query
        .taken
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    let results: Vec<CorporationInfo> = corporations::search(query.q.as_deref().unwrap_or(""))
        .into_iter()
        .map(|c| CorporationInfo::from_corporation(c, &taken))
        .collect();

    Json(results)
}
