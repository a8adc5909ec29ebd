pub mod aggregate;
pub mod handlers;
pub mod models;
pub mod service;

pub use aggregate::{podium_by_player, winners_by_player, wins_by_corporation};
pub use models::{AggregateStats, PodiumCounts};
pub use service::StatsService;
