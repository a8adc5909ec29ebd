use serde::{Deserialize, Serialize};

use crate::games::models::GameRecord;

/// Facts about the game collection that have already happened, used to
/// notify live feed subscribers without coupling them to the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GamesEvent {
    /// A game record was appended to one of the stores.
    GameRecorded { record: GameRecord },
}

impl GamesEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            GamesEvent::GameRecorded { .. } => "game_recorded",
        }
    }
}
