use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marskeeper::config::{AppConfig, StoreBackend};
use marskeeper::event::EventBus;
use marskeeper::games::repository::{
    GameRepository, InMemoryGameRepository, LocalGameRepository, PostgresGameRepository,
};
use marskeeper::session::repository::{
    InMemorySessionRepository, PostgresSessionRepository, SessionRepository,
};
use marskeeper::shared::AppState;
use marskeeper::app_router;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marskeeper=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting marskeeper score-tracking server");

    let config = AppConfig::from_env();
    let local_repository = Arc::new(LocalGameRepository::new());

    // Select the stores from configuration; the developer override routes
    // submissions into the local fallback store instead of the shared one.
    let (session_repository, game_repository): (
        Arc<dyn SessionRepository + Send + Sync>,
        Arc<dyn GameRepository + Send + Sync>,
    ) = match &config.store {
        StoreBackend::Postgres { url } => {
            let pool = sqlx::PgPool::connect(url)
                .await
                .expect("Failed to connect to database");
            (
                Arc::new(PostgresSessionRepository::new(pool.clone())),
                Arc::new(PostgresGameRepository::new(pool)),
            )
        }
        StoreBackend::Memory => (
            Arc::new(InMemorySessionRepository::new()),
            Arc::new(InMemoryGameRepository::new()),
        ),
        StoreBackend::LocalOnly => {
            info!("Developer override active: games go to the local-only store");
            (
                Arc::new(InMemorySessionRepository::new()),
                Arc::clone(&local_repository) as Arc<dyn GameRepository + Send + Sync>,
            )
        }
    };

    let bind_addr = config.bind_addr.clone();
    let app_state = AppState::new(
        session_repository,
        game_repository,
        local_repository,
        EventBus::new(100),
        config,
    );

    let app = app_router(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();
    info!("Server running on http://{}", bind_addr);
    axum::serve(listener, app).await.unwrap();
}
