use tokio::sync::broadcast;
use tracing::debug;

use super::events::GamesEvent;

/// Broadcast channel distributing collection-change events to live feed
/// subscribers. Cloning shares the underlying channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<GamesEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Emits an event to all current subscribers. Having no subscribers is
    /// normal (nobody is watching the live feed) and not an error.
    pub fn emit(&self, event: GamesEvent) {
        let event_type = event.event_type();
        match self.sender.send(event) {
            Ok(receivers) => {
                debug!(event_type, receivers, "Games event emitted");
            }
            Err(_) => {
                debug!(event_type, "Games event emitted with no receivers");
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GamesEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::models::GameRecord;

    fn sample_record() -> GameRecord {
        GameRecord {
            id: "g-1".to_string(),
            players: vec![],
            created_at: "2024-01-01T00:00:00Z".to_string(),
            is_local_only: false,
        }
    }

    #[tokio::test]
    async fn subscribers_receive_emitted_events() {
        let bus = EventBus::new(8);
        let mut receiver = bus.subscribe();

        bus.emit(GamesEvent::GameRecorded {
            record: sample_record(),
        });

        let event = receiver.recv().await.unwrap();
        assert!(matches!(event, GamesEvent::GameRecorded { record } if record.id == "g-1"));
    }

    #[tokio::test]
    async fn emitting_without_subscribers_does_not_panic() {
        let bus = EventBus::new(8);
        bus.emit(GamesEvent::GameRecorded {
            record: sample_record(),
        });
    }
}
