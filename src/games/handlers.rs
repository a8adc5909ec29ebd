use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{info, instrument};

use super::models::GameRecord;
use crate::shared::{AppError, AppState};

/// HTTP handler for reading the game collection
///
/// GET /games
/// Returns all records from the configured store in createdAt order.
#[instrument(name = "list_games", skip(state))]
pub async fn list_games(State(state): State<AppState>) -> Result<Json<Vec<GameRecord>>, AppError> {
    let games = state.game_repository.list_games().await?;
    info!(game_count = games.len(), "Games listed successfully");
    Ok(Json(games))
}

/// Debug handler for inspecting the local fallback store
///
/// GET /dev/local-saves
#[instrument(name = "list_local_saves", skip(state))]
pub async fn list_local_saves(
    State(state): State<AppState>,
) -> Result<Json<Vec<GameRecord>>, AppError> {
    ensure_dev_tools(&state)?;
    let saves = state.local_repository.list_saves();
    info!(save_count = saves.len(), "Local saves listed");
    Ok(Json(saves))
}

/// DELETE /dev/local-saves/{id}
#[instrument(name = "delete_local_save", skip(state))]
pub async fn delete_local_save(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    ensure_dev_tools(&state)?;
    state.local_repository.delete_save(&id)?;
    info!(save_id = %id, "Local save deleted");
    Ok(Json(json!({ "deleted": id })))
}

/// DELETE /dev/local-saves
#[instrument(name = "clear_local_saves", skip(state))]
pub async fn clear_local_saves(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    ensure_dev_tools(&state)?;
    let removed = state.local_repository.clear_saves();
    info!(removed, "Local saves cleared");
    Ok(Json(json!({ "removed": removed })))
}

/// The debug surface simply does not exist unless dev tools are enabled.
fn ensure_dev_tools(state: &AppState) -> Result<(), AppError> {
    if state.config.dev_tools {
        Ok(())
    } else {
        Err(AppError::NotFound("Not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::games::repository::{GameRepository, LocalGameRepository};
    use crate::shared::test_utils::AppStateBuilder;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::{delete, get},
        Router,
    };
    use std::sync::Arc;
    use tower::ServiceExt; // for `oneshot`

    fn dev_config() -> AppConfig {
        AppConfig {
            dev_tools: true,
            ..AppConfig::default()
        }
    }

    fn dev_router(state: AppState) -> Router {
        Router::new()
            .route(
                "/dev/local-saves",
                get(list_local_saves).delete(clear_local_saves),
            )
            .route("/dev/local-saves/:id", delete(delete_local_save))
            .with_state(state)
    }

    async fn seeded_local_repository() -> Arc<LocalGameRepository> {
        let repo = Arc::new(LocalGameRepository::new());
        let record = GameRecord {
            id: String::new(),
            players: vec![],
            created_at: "2024-01-01T00:00:00Z".to_string(),
            is_local_only: false,
        };
        repo.append_game(&record).await.unwrap();
        repo
    }

    #[tokio::test]
    async fn local_saves_listing_requires_dev_tools() {
        let state = AppStateBuilder::new()
            .with_local_repository(seeded_local_repository().await)
            .build();
        let response = dev_router(state)
            .oneshot(
                Request::builder()
                    .uri("/dev/local-saves")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn local_saves_are_listed_when_dev_tools_enabled() {
        let state = AppStateBuilder::new()
            .with_local_repository(seeded_local_repository().await)
            .with_config(dev_config())
            .build();
        let response = dev_router(state)
            .oneshot(
                Request::builder()
                    .uri("/dev/local-saves")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let saves: Vec<GameRecord> = serde_json::from_slice(&body).unwrap();
        assert_eq!(saves.len(), 1);
        assert!(saves[0].is_local_only);
    }

    #[tokio::test]
    async fn clearing_local_saves_reports_removed_count() {
        let state = AppStateBuilder::new()
            .with_local_repository(seeded_local_repository().await)
            .with_config(dev_config())
            .build();
        let response = dev_router(state)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/dev/local-saves")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["removed"], 1);
    }
}
