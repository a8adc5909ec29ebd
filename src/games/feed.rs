use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;

use super::models::GameRecord;
use super::repository::GameRepository;
use crate::event::{EventBus, GamesEvent};
use crate::shared::AppError;

/// How a caller wants to observe the game collection. The two strategies
/// are an explicit choice rather than fallback logic buried inside one
/// function: live subscription for views that track changes, one-shot
/// snapshot for everything else (and as the fallback when a live receiver
/// lags out).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStrategy {
    Live,
    Snapshot,
}

/// An opened feed: either a broadcast receiver of collection events or a
/// full snapshot of the collection at the time of the call.
pub enum GameFeed {
    Live(broadcast::Receiver<GamesEvent>),
    Snapshot(Vec<GameRecord>),
}

/// Hands out feeds over one store + event bus pair.
#[derive(Clone)]
pub struct GameFeedSource {
    repository: Arc<dyn GameRepository + Send + Sync>,
    event_bus: EventBus,
}

impl GameFeedSource {
    pub fn new(repository: Arc<dyn GameRepository + Send + Sync>, event_bus: EventBus) -> Self {
        Self {
            repository,
            event_bus,
        }
    }

    pub async fn open(&self, strategy: FeedStrategy) -> Result<GameFeed, AppError> {
        match strategy {
            FeedStrategy::Live => {
                debug!("Opening live game feed");
                Ok(GameFeed::Live(self.event_bus.subscribe()))
            }
            FeedStrategy::Snapshot => {
                let games = self.repository.list_games().await?;
                debug!(game_count = games.len(), "Opened snapshot game feed");
                Ok(GameFeed::Snapshot(games))
            }
        }
    }

    /// Snapshot without the enum wrapper, for callers that only ever need
    /// the current collection (the aggregator).
    pub async fn snapshot(&self) -> Result<Vec<GameRecord>, AppError> {
        self.repository.list_games().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::repository::InMemoryGameRepository;

    fn record(id: &str) -> GameRecord {
        GameRecord {
            id: id.to_string(),
            players: vec![],
            created_at: "2024-01-01T00:00:00Z".to_string(),
            is_local_only: false,
        }
    }

    #[tokio::test]
    async fn snapshot_feed_returns_current_collection() {
        let repository = Arc::new(InMemoryGameRepository::new());
        repository.append_game(&record("g-1")).await.unwrap();

        let source = GameFeedSource::new(repository, EventBus::new(8));
        let feed = source.open(FeedStrategy::Snapshot).await.unwrap();

        match feed {
            GameFeed::Snapshot(games) => {
                assert_eq!(games.len(), 1);
                assert_eq!(games[0].id, "g-1");
            }
            GameFeed::Live(_) => panic!("expected snapshot feed"),
        }
    }

    #[tokio::test]
    async fn live_feed_sees_events_emitted_after_opening() {
        let repository = Arc::new(InMemoryGameRepository::new());
        let bus = EventBus::new(8);
        let source = GameFeedSource::new(repository, bus.clone());

        let feed = source.open(FeedStrategy::Live).await.unwrap();
        let mut receiver = match feed {
            GameFeed::Live(receiver) => receiver,
            GameFeed::Snapshot(_) => panic!("expected live feed"),
        };

        bus.emit(GamesEvent::GameRecorded {
            record: record("g-2"),
        });

        let event = receiver.recv().await.unwrap();
        assert!(matches!(event, GamesEvent::GameRecorded { record } if record.id == "g-2"));
    }
}
