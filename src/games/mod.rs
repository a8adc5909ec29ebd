pub mod feed;
pub mod handlers;
pub mod models;
pub mod repository;

pub use feed::{FeedStrategy, GameFeed, GameFeedSource};
pub use models::{GameRecord, PlayerEntry};
pub use repository::{
    GameRepository, InMemoryGameRepository, LocalGameRepository, PostgresGameRepository,
};
