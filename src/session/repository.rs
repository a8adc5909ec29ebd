use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::SessionModel;
use crate::shared::AppError;

/// Trait for session repository operations
#[async_trait]
pub trait SessionRepository {
    async fn create_session(&self, session: &SessionModel) -> Result<(), AppError>;
    async fn get_session(&self, session_id: &str) -> Result<Option<SessionModel>, AppError>;
    async fn delete_session(&self, session_id: &str) -> Result<(), AppError>;
    async fn cleanup_expired_sessions(&self) -> Result<u64, AppError>;
}

/// In-memory implementation of SessionRepository for development and
/// testing. Sessions are lost on restart.
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: Mutex<HashMap<String, SessionModel>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    #[instrument(skip(self, session))]
    async fn create_session(&self, session: &SessionModel) -> Result<(), AppError> {
        debug!(session_id = %session.id, display_name = %session.display_name, "Creating session in memory");

        let mut sessions = self.sessions.lock().unwrap();
        if sessions.contains_key(&session.id) {
            warn!(session_id = %session.id, "Session already exists in memory");
            return Err(AppError::StorageError("Session already exists".to_string()));
        }
        sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_session(&self, session_id: &str) -> Result<Option<SessionModel>, AppError> {
        let sessions = self.sessions.lock().unwrap();
        Ok(sessions.get(session_id).cloned())
    }

    #[instrument(skip(self))]
    async fn delete_session(&self, session_id: &str) -> Result<(), AppError> {
        let mut sessions = self.sessions.lock().unwrap();
        if sessions.remove(session_id).is_none() {
            return Err(AppError::NotFound("Session not found".to_string()));
        }
        debug!(session_id = %session_id, "Session deleted from memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn cleanup_expired_sessions(&self) -> Result<u64, AppError> {
        let mut sessions = self.sessions.lock().unwrap();
        let now = Utc::now();
        let initial_count = sessions.len();
        sessions.retain(|_, session| session.expires_at > now);
        let removed = (initial_count - sessions.len()) as u64;
        debug!(expired_sessions_removed = removed, "Expired sessions cleaned up from memory");
        Ok(removed)
    }
}

/// PostgreSQL implementation of session repository
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    #[instrument(skip(self, session))]
    async fn create_session(&self, session: &SessionModel) -> Result<(), AppError> {
        debug!(session_id = %session.id, "Creating session in database");

        sqlx::query(
            "INSERT INTO sessions (id, display_name, created_at, expires_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(&session.id)
        .bind(&session.display_name)
        .bind(session.created_at)
        .bind(session.expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to create session in database");
            AppError::StorageError(e.to_string())
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_session(&self, session_id: &str) -> Result<Option<SessionModel>, AppError> {
        let row = sqlx::query(
            "SELECT id, display_name, created_at, expires_at FROM sessions WHERE id = $1",
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, session_id = %session_id, "Failed to fetch session from database");
            AppError::StorageError(e.to_string())
        })?;

        Ok(row.map(|row| SessionModel {
            id: row.get("id"),
            display_name: row.get("display_name"),
            created_at: row.get("created_at"),
            expires_at: row.get("expires_at"),
        }))
    }

    #[instrument(skip(self))]
    async fn delete_session(&self, session_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, session_id = %session_id, "Failed to delete session from database");
                AppError::StorageError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Session not found".to_string()));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn cleanup_expired_sessions(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at < $1")
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to cleanup expired sessions");
                AppError::StorageError(e.to_string())
            })?;

        debug!(
            expired_sessions_removed = result.rows_affected(),
            "Expired sessions cleaned up"
        );
        Ok(result.rows_affected())
    }
}
