use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::models::AggregateStats;
use super::service::StatsService;
use crate::games::feed::GameFeedSource;
use crate::shared::{AppError, AppState};

/// HTTP handler for the stats view
///
/// GET /stats
/// Returns win counts, corporation wins and podium counts, recomputed from
/// the full game collection on every request.
#[instrument(name = "get_stats", skip(state))]
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<AggregateStats>, AppError> {
    let feed = GameFeedSource::new(
        Arc::clone(&state.game_repository),
        state.event_bus.clone(),
    );
    let service = StatsService::new(feed);
    let stats = service.aggregate().await?;

    info!(
        players_with_wins = stats.winners_by_player.len(),
        corporations_with_wins = stats.wins_by_corporation.len(),
        "Stats aggregated successfully"
    );

    Ok(Json(stats))
}
