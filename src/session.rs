//! Per-run player state
//!
//! Owned by the gameplay layer. Points accumulate as bricks break; when the
//! run ends the result is submitted to the score store.

use crate::highscores::Champion;
use crate::leaderboard::PLACEHOLDER_NAME;
use crate::persistence::{ScoreStore, StoreError};
use crate::platform::Storage;

/// Points awarded per brick, by brick row (bottom row first)
pub const BRICK_ROW_POINTS: [u64; 6] = [1, 1, 2, 2, 5, 5];

/// Points for a brick in `row`, `None` past the last row
pub fn brick_points(row: usize) -> Option<u64> {
    BRICK_ROW_POINTS.get(row).copied()
}

/// State of the current player and run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSession {
    player_name: String,
    points: u64,
    game_over: bool,
}

impl Default for RunSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RunSession {
    pub fn new() -> Self {
        Self {
            player_name: PLACEHOLDER_NAME.to_string(),
            points: 0,
            game_over: false,
        }
    }

    /// Confirm the name typed by the player. Stored as entered, even if blank.
    pub fn submit_player_name(&mut self, name: &str) {
        self.player_name = name.to_string();
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    /// Add points for a destroyed brick. Ignored once the run is over.
    pub fn add_points(&mut self, points: u64) {
        if self.game_over {
            return;
        }
        self.points = self.points.saturating_add(points);
    }

    /// HUD label, e.g. `Score : 12`
    pub fn score_label(&self) -> String {
        format!("Score : {}", self.points)
    }

    /// Ball was lost
    pub fn set_game_over(&mut self) {
        self.game_over = true;
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Submit this run's score and return the champion afterwards.
    ///
    /// On a write failure the run stays intact so the caller can retry.
    pub fn finish<S: Storage>(&mut self, store: &ScoreStore<S>) -> Result<Champion, StoreError> {
        self.game_over = true;
        let champion = store.append_score(&self.player_name, self.points)?;
        log::info!(
            "Run finished: {:?} scored {}",
            self.player_name,
            self.points
        );
        Ok(champion)
    }

    /// Start another run with the same player
    pub fn restart(&mut self) {
        self.points = 0;
        self.game_over = false;
    }
}
