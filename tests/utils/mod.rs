#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

use marskeeper::config::AppConfig;
use marskeeper::event::EventBus;
use marskeeper::games::repository::{GameRepository, LocalGameRepository};
use marskeeper::session::repository::InMemorySessionRepository;
use marskeeper::shared::AppState;
use marskeeper::{app_router, InMemoryGameRepository};

/// Full application router over in-memory stores.
pub fn test_app() -> Router {
    app_with(Arc::new(InMemoryGameRepository::new()))
}

pub fn app_with(game_repository: Arc<dyn GameRepository + Send + Sync>) -> Router {
    app_with_config(game_repository, AppConfig::default())
}

pub fn app_with_config(
    game_repository: Arc<dyn GameRepository + Send + Sync>,
    config: AppConfig,
) -> Router {
    app_router(AppState::new(
        Arc::new(InMemorySessionRepository::new()),
        game_repository,
        Arc::new(LocalGameRepository::new()),
        EventBus::new(100),
        config,
    ))
}

/// Local-store variant: submissions land in the returned repository and
/// the dev endpoints are enabled.
pub fn local_store_app() -> (Router, Arc<LocalGameRepository>) {
    let local_repository = Arc::new(LocalGameRepository::new());
    let config = AppConfig {
        dev_tools: true,
        ..AppConfig::default()
    };
    let app = app_router(AppState::new(
        Arc::new(InMemorySessionRepository::new()),
        Arc::clone(&local_repository) as Arc<dyn GameRepository + Send + Sync>,
        Arc::clone(&local_repository),
        EventBus::new(100),
        config,
    ));
    (app, local_repository)
}

/// Logs in as the given player and returns the bearer token.
pub async fn login(app: &Router, name: &str) -> String {
    let (status, body) = send_json(
        app,
        "POST",
        "/session",
        None,
        Some(serde_json::json!({ "name": name, "password": "secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["session_id"].as_str().expect("token in response").to_string()
}

/// Sends a request through the router and parses the JSON response body.
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Draft payload builder: (name, corporation, terraformingRating, victoryPoints).
pub fn draft(players: &[(&str, &str, i64, i64)]) -> Value {
    let players: Vec<Value> = players
        .iter()
        .enumerate()
        .map(|(i, (name, corporation, tr, vp))| {
            serde_json::json!({
                "id": format!("p-{}", i + 1),
                "name": name,
                "corporation": corporation,
                "terraformingRating": tr,
                "awards": 0,
                "milestones": 0,
                "greeneries": 0,
                "cities": 0,
                "victoryPoints": vp,
                "total": 0,
                "rank": 1,
            })
        })
        .collect();
    serde_json::json!({ "players": players })
}
