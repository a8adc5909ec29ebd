use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::models::GameRecord;
use crate::shared::AppError;

/// Operation contract of the document collection store: append one record
/// (returning the assigned id) and read the collection back in createdAt
/// order. Records are immutable once appended; there is no update or
/// delete in the contract.
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn append_game(&self, record: &GameRecord) -> Result<GameRecord, AppError>;
    async fn list_games(&self) -> Result<Vec<GameRecord>, AppError>;
}

/// In-memory implementation of GameRepository for development and testing.
///
/// Records live in insertion order and are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryGameRepository {
    games: Mutex<Vec<GameRecord>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self {
            games: Mutex::new(Vec::new()),
        }
    }

    /// Creates a repository pre-populated with records, for tests.
    pub fn with_games(games: Vec<GameRecord>) -> Self {
        Self {
            games: Mutex::new(games),
        }
    }

    pub fn game_count(&self) -> usize {
        self.games.lock().unwrap().len()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    #[instrument(skip(self, record))]
    async fn append_game(&self, record: &GameRecord) -> Result<GameRecord, AppError> {
        let mut stored = record.clone();
        if stored.id.is_empty() {
            stored.id = Uuid::new_v4().to_string();
        }

        debug!(game_id = %stored.id, players = stored.players.len(), "Appending game in memory");

        let mut games = self.games.lock().unwrap();
        if games.iter().any(|g| g.id == stored.id) {
            warn!(game_id = %stored.id, "Game already exists in memory");
            return Err(AppError::StorageError("Game already exists".to_string()));
        }
        games.push(stored.clone());

        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn list_games(&self) -> Result<Vec<GameRecord>, AppError> {
        let games = self.games.lock().unwrap();
        let mut result = games.clone();
        // Stable: records sharing a timestamp keep insertion order.
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        debug!(game_count = result.len(), "Listed games from memory");
        Ok(result)
    }
}

/// PostgreSQL implementation of the shared game store.
///
/// The full record is kept as a JSON text payload next to an indexable
/// createdAt column; a payload that no longer parses is skipped with a
/// warning instead of failing the whole read, since the aggregator must
/// produce a best-effort view.
pub struct PostgresGameRepository {
    pool: PgPool,
}

impl PostgresGameRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameRepository for PostgresGameRepository {
    #[instrument(skip(self, record))]
    async fn append_game(&self, record: &GameRecord) -> Result<GameRecord, AppError> {
        let mut stored = record.clone();
        if stored.id.is_empty() {
            stored.id = Uuid::new_v4().to_string();
        }

        let created_at = DateTime::parse_from_rfc3339(&stored.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        let payload = serde_json::to_string(&stored)
            .map_err(|e| AppError::StorageError(e.to_string()))?;

        debug!(game_id = %stored.id, "Appending game to database");

        sqlx::query("INSERT INTO games (id, created_at, payload) VALUES ($1, $2, $3)")
            .bind(&stored.id)
            .bind(created_at)
            .bind(&payload)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to append game to database");
                AppError::StorageError(e.to_string())
            })?;

        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn list_games(&self) -> Result<Vec<GameRecord>, AppError> {
        let rows = sqlx::query("SELECT id, payload FROM games ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to list games from database");
                AppError::StorageError(e.to_string())
            })?;

        let mut games = Vec::with_capacity(rows.len());
        for row in rows {
            let payload: String = row.get("payload");
            match serde_json::from_str::<GameRecord>(&payload) {
                Ok(record) => games.push(record),
                Err(e) => {
                    let id: String = row.get("id");
                    warn!(game_id = %id, error = %e, "Skipping unreadable game payload");
                }
            }
        }

        debug!(game_count = games.len(), "Listed games from database");
        Ok(games)
    }
}

const LOCAL_SAVE_PREFIX: &str = "mock-game-";

/// Local-only fallback store: the developer override writes games here
/// instead of the shared collection. Records are marked `isLocalOnly` so
/// the stats view and the UI can tell them apart, and the debug endpoints
/// expose the extra list/delete/clear operations.
#[derive(Debug, Default)]
pub struct LocalGameRepository {
    saves: Mutex<BTreeMap<String, GameRecord>>,
    next_save: AtomicU64,
}

impl LocalGameRepository {
    pub fn new() -> Self {
        Self {
            saves: Mutex::new(BTreeMap::new()),
            next_save: AtomicU64::new(1),
        }
    }

    /// Debug view: all saves in key order.
    pub fn list_saves(&self) -> Vec<GameRecord> {
        self.saves.lock().unwrap().values().cloned().collect()
    }

    pub fn delete_save(&self, id: &str) -> Result<(), AppError> {
        let mut saves = self.saves.lock().unwrap();
        if saves.remove(id).is_none() {
            return Err(AppError::NotFound(format!("No local save {id}")));
        }
        debug!(save_id = %id, "Deleted local save");
        Ok(())
    }

    /// Removes every local save, returning how many were dropped.
    pub fn clear_saves(&self) -> usize {
        let mut saves = self.saves.lock().unwrap();
        let removed = saves.len();
        saves.clear();
        debug!(removed, "Cleared local saves");
        removed
    }
}

#[async_trait]
impl GameRepository for LocalGameRepository {
    #[instrument(skip(self, record))]
    async fn append_game(&self, record: &GameRecord) -> Result<GameRecord, AppError> {
        let sequence = self.next_save.fetch_add(1, Ordering::Relaxed);

        let mut stored = record.clone();
        stored.id = format!("{LOCAL_SAVE_PREFIX}{sequence:06}");
        stored.is_local_only = true;

        debug!(save_id = %stored.id, "Saving game to local fallback store");

        self.saves
            .lock()
            .unwrap()
            .insert(stored.id.clone(), stored.clone());
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn list_games(&self) -> Result<Vec<GameRecord>, AppError> {
        let saves = self.saves.lock().unwrap();
        let mut result: Vec<GameRecord> = saves.values().cloned().collect();
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(result)
    }
}
