//! Ranked leaderboard view
//!
//! Ranks are computed here and nowhere else, so this is also where blank
//! player names are replaced by the placeholder name. Row tiers and the
//! palette are plain data for whatever draws the table.

use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::highscores::{Champion, ScoreList};

/// Name shown for entries stored with a blank name
pub const PLACEHOLDER_NAME: &str = "Player";
/// Label shown when nobody holds the high score yet
pub const NO_CHAMPION_LABEL: &str = "None";
/// Text of the single row shown for an empty leaderboard
pub const EMPTY_LEADERBOARD_TEXT: &str = "No scores yet";

/// One ranked leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    /// 1-based rank
    pub rank: usize,
    pub name: String,
    pub score: u64,
}

impl From<RankedEntry> for Champion {
    fn from(entry: RankedEntry) -> Self {
        Self {
            name: entry.name,
            score: entry.score,
        }
    }
}

/// `name`, or `placeholder` if it is empty or whitespace-only
pub fn display_name<'a>(name: &'a str, placeholder: &'a str) -> &'a str {
    if name.trim().is_empty() {
        placeholder
    } else {
        name
    }
}

/// Rank an already sorted list, keeping at most `limit` entries (`limit <= 0` keeps all)
pub fn ranked_entries(list: &ScoreList, limit: i64, placeholder: &str) -> Vec<RankedEntry> {
    let count = match usize::try_from(limit) {
        Ok(limit) if limit > 0 => limit.min(list.len()),
        _ => list.len(),
    };

    list.entries
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, record)| RankedEntry {
            rank: i + 1,
            name: display_name(&record.name, placeholder).to_string(),
            score: record.score,
        })
        .collect()
}

/// Banner text, e.g. `Highest Score: Ann: 50`
pub fn champion_banner(champion: Option<&Champion>, fallback: &str) -> String {
    match champion {
        Some(champion) => format!(
            "Highest Score: {}: {}",
            display_name(&champion.name, fallback),
            champion.score
        ),
        None => format!("Highest Score: {fallback}: 0"),
    }
}

/// Visual tier of a leaderboard row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTier {
    Gold,
    Silver,
    Bronze,
    Even,
    Odd,
}

impl RowTier {
    /// Tier for a 1-based rank. Ranks 1-3 are medals, the rest alternate.
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            1 => RowTier::Gold,
            2 => RowTier::Silver,
            3 => RowTier::Bronze,
            // rank 1 sits at row index 0, which is an "even" row
            r if r % 2 == 1 => RowTier::Even,
            _ => RowTier::Odd,
        }
    }

    pub fn is_medal(&self) -> bool {
        matches!(self, RowTier::Gold | RowTier::Silver | RowTier::Bronze)
    }
}

/// RGBA colors for leaderboard rows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub even_row: Vec4,
    pub odd_row: Vec4,
    pub gold: Vec4,
    pub silver: Vec4,
    pub bronze: Vec4,
    pub normal_text: Vec4,
    pub top_text: Vec4,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            even_row: Vec4::new(1.0, 1.0, 1.0, 0.08),
            odd_row: Vec4::new(1.0, 1.0, 1.0, 0.14),
            gold: Vec4::new(1.0, 0.84, 0.0, 0.25),
            silver: Vec4::new(0.75, 0.75, 0.75, 0.25),
            bronze: Vec4::new(0.8, 0.5, 0.2, 0.25),
            normal_text: Vec4::ONE,
            top_text: Vec4::ONE,
        }
    }
}

impl Palette {
    pub fn background(&self, tier: RowTier) -> Vec4 {
        match tier {
            RowTier::Gold => self.gold,
            RowTier::Silver => self.silver,
            RowTier::Bronze => self.bronze,
            RowTier::Even => self.even_row,
            RowTier::Odd => self.odd_row,
        }
    }

    pub fn text(&self, tier: RowTier) -> Vec4 {
        if tier.is_medal() {
            self.top_text
        } else {
            self.normal_text
        }
    }
}

/// A row ready to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    /// 0 for the empty-board placeholder row
    pub rank: usize,
    pub name: String,
    pub score: u64,
    pub background: Vec4,
    pub text_color: Vec4,
}

/// Rows for a ranked view. An empty view yields a single "No scores yet" row.
pub fn rows(entries: &[RankedEntry], palette: &Palette) -> Vec<LeaderboardRow> {
    if entries.is_empty() {
        return vec![LeaderboardRow {
            rank: 0,
            name: EMPTY_LEADERBOARD_TEXT.to_string(),
            score: 0,
            background: palette.background(RowTier::Odd),
            text_color: palette.text(RowTier::Odd),
        }];
    }

    entries
        .iter()
        .map(|entry| {
            let tier = RowTier::for_rank(entry.rank);
            LeaderboardRow {
                rank: entry.rank,
                name: entry.name.clone(),
                score: entry.score,
                background: palette.background(tier),
                text_color: palette.text(tier),
            }
        })
        .collect()
}
