// Library crate for the marskeeper score-tracking server
// This file exposes the public API for integration tests

pub mod config;
pub mod event;
pub mod games;
pub mod session;
pub mod shared;
pub mod stats;
pub mod submission;

// Re-export commonly used types for easier access in tests
pub use config::{AppConfig, StoreBackend};
pub use event::{EventBus, GamesEvent};
pub use games::{
    FeedStrategy, GameFeed, GameFeedSource, GameRecord, GameRepository, InMemoryGameRepository,
    LocalGameRepository, PlayerEntry,
};
pub use shared::{AppError, AppState};
pub use stats::{AggregateStats, PodiumCounts, StatsService};
pub use submission::{SubmissionError, SubmissionService, ValidationReport};

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Builds the full application router over the given state.
///
/// Everything that reads or writes the game collection sits behind the
/// session middleware; login, the corporation reference list and the
/// config-gated dev endpoints are open.
pub fn app_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/session/validate", get(session::validate_session))
        .route(
            "/games",
            get(games::handlers::list_games).post(submission::handlers::submit_game),
        )
        .route("/games/preview", post(submission::handlers::preview_game))
        .route("/stats", get(stats::handlers::get_stats))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session::jwt_auth,
        ));

    Router::new()
        .route("/", get(|| async { "marskeeper" }))
        .route("/session", post(session::login))
        .route(
            "/corporations",
            get(submission::handlers::list_corporations),
        )
        .route(
            "/dev/local-saves",
            get(games::handlers::list_local_saves).delete(games::handlers::clear_local_saves),
        )
        .route(
            "/dev/local-saves/:id",
            delete(games::handlers::delete_local_save),
        )
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
