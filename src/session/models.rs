use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for login sessions
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SessionModel {
    pub id: String, // UUID v4 as string
    /// Name the user logged in with; the only thing the rest of the app
    /// needs from the identity provider.
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionModel {
    pub fn new(display_name: String, expiration_days: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            display_name,
            created_at: now,
            expires_at: now + chrono::Duration::days(expiration_days),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}
