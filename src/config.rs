use tracing::warn;

/// Which store submissions are written to and reads come from.
///
/// `LocalOnly` is the developer override from the original toolbar: games
/// go to the browser-local-style fallback store and are marked as such.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Postgres { url: String },
    LocalOnly,
}

/// Application configuration, resolved once at startup and threaded into
/// `AppState`. Business logic never reads the environment directly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub store: StoreBackend,
    /// Enables the /dev/local-saves debug endpoints.
    pub dev_tools: bool,
}

impl AppConfig {
    /// Reads configuration from the environment, falling back to safe
    /// defaults rather than failing: a misconfigured store degrades to the
    /// in-memory one with a warning.
    pub fn from_env() -> Self {
        let store = match std::env::var("MARSKEEPER_STORE").as_deref() {
            Ok("postgres") => match std::env::var("DATABASE_URL") {
                Ok(url) => StoreBackend::Postgres { url },
                Err(_) => {
                    warn!("MARSKEEPER_STORE=postgres but DATABASE_URL is unset, using in-memory store");
                    StoreBackend::Memory
                }
            },
            Ok("local") => StoreBackend::LocalOnly,
            Ok(other) if other != "memory" => {
                warn!(store = other, "Unknown MARSKEEPER_STORE value, using in-memory store");
                StoreBackend::Memory
            }
            _ => StoreBackend::Memory,
        };

        let dev_tools = std::env::var("MARSKEEPER_DEV_TOOLS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Self {
            bind_addr: std::env::var("MARSKEEPER_BIND")
                .unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            store,
            dev_tools,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            store: StoreBackend::Memory,
            dev_tools: false,
        }
    }
}
