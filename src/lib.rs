//! Brick Scores - score persistence for a brick-breaker game
//!
//! Core modules:
//! - `highscores`: Score records and the persisted list format
//! - `persistence`: The score store (load, append, ranked queries)
//! - `leaderboard`: Ranking, name normalization and row tiers
//! - `platform`: Browser/native storage backends
//! - `session`: Per-run player name and points
//! - `settings`: Leaderboard and storage settings

pub mod highscores;
pub mod leaderboard;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod settings;

pub use highscores::{Champion, ScoreList, ScoreRecord};
pub use leaderboard::{LeaderboardRow, Palette, RankedEntry, RowTier};
pub use persistence::{ScoreStore, StoreError};
pub use session::RunSession;
pub use settings::Settings;
