pub mod feed;
pub mod game;

pub use feed::{FeedGame, FeedGameStatus, FeedTeam, Scoreboard, normalize_games, normalize_scoreboard};
pub use game::{GameScore, StoredScore};
