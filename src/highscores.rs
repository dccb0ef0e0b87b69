//! High score records
//!
//! The whole list is persisted as one JSON document:
//!
//! ```json
//! { "playerAndScoreList": [ { "_name": "Ann", "_score": 50 } ] }
//! ```

use serde::{Deserialize, Serialize};

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Player's name, stored as entered (may be blank)
    #[serde(rename = "_name", default)]
    pub name: String,
    /// Player's score
    #[serde(rename = "_score", default)]
    pub score: u64,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, score: u64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// The player holding the top score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Champion {
    pub name: String,
    pub score: u64,
}

impl From<&ScoreRecord> for Champion {
    fn from(record: &ScoreRecord) -> Self {
        Self {
            name: record.name.clone(),
            score: record.score,
        }
    }
}

/// Every score ever recorded, in stored order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreList {
    #[serde(rename = "playerAndScoreList", default)]
    pub entries: Vec<ScoreRecord>,
}

impl ScoreList {
    /// Create empty list
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse the persisted JSON form
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Pretty-printed JSON form, ready to be written out
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Append a record at the end (no re-sort)
    pub fn push(&mut self, record: ScoreRecord) {
        self.entries.push(record);
    }

    /// Sort descending by score.
    ///
    /// The sort is stable, so records with equal scores keep their current
    /// relative order (oldest appended first).
    pub fn sort_descending(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// Top entry, assuming the list is sorted
    pub fn champion(&self) -> Option<Champion> {
        self.entries.first().map(Champion::from)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
