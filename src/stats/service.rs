use tracing::debug;

use super::aggregate;
use super::models::AggregateStats;
use crate::games::feed::GameFeedSource;
use crate::shared::AppError;

/// Service recomputing the aggregate view from the game collection.
///
/// Holds no cache: every call takes a fresh snapshot through the feed and
/// recomputes all tallies. The collection is bounded by group size, so the
/// linear pass is not a concern.
pub struct StatsService {
    feed: GameFeedSource,
}

impl StatsService {
    pub fn new(feed: GameFeedSource) -> Self {
        Self { feed }
    }

    pub async fn aggregate(&self) -> Result<AggregateStats, AppError> {
        let games = self.feed.snapshot().await?;
        debug!(game_count = games.len(), "Aggregating game collection");
        Ok(aggregate::aggregate(&games))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventBus;
    use crate::games::models::{GameRecord, PlayerEntry};
    use crate::games::repository::{GameRepository, InMemoryGameRepository};
    use std::sync::Arc;

    #[tokio::test]
    async fn aggregates_current_collection_snapshot() {
        let repository = Arc::new(InMemoryGameRepository::new());
        let record = GameRecord {
            id: String::new(),
            players: vec![PlayerEntry {
                name: "Alice".to_string(),
                corporation: "Helion".to_string(),
                rank: 1,
                ..PlayerEntry::empty("p-1")
            }],
            created_at: "2024-01-01T00:00:00Z".to_string(),
            is_local_only: false,
        };
        repository.append_game(&record).await.unwrap();

        let service = StatsService::new(GameFeedSource::new(repository.clone(), EventBus::new(8)));
        let stats = service.aggregate().await.unwrap();
        assert_eq!(stats.winners_by_player.get("Alice"), Some(&1));

        // A second submission is picked up by the next aggregation pass.
        repository.append_game(&record).await.unwrap();
        let stats = service.aggregate().await.unwrap();
        assert_eq!(stats.winners_by_player.get("Alice"), Some(&2));
    }
}
