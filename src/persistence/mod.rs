//! Score persistence
//!
//! Every operation re-reads the backing storage; nothing is cached between
//! calls. Appending is load → push → stable sort → rewrite the whole list,
//! and the rewrite goes through [`Storage::write`], which replaces the
//! document atomically.

mod error;

pub use error::StoreError;

use crate::highscores::{Champion, ScoreList, ScoreRecord};
use crate::leaderboard::{self, PLACEHOLDER_NAME, RankedEntry};
use crate::platform::Storage;

/// Stored data that `load` could not use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Discarded {
    Unreadable,
    Malformed,
}

/// Durable store of every recorded score
#[derive(Debug)]
pub struct ScoreStore<S> {
    storage: S,
    placeholder_name: String,
}

impl<S: Storage> ScoreStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            placeholder_name: PLACEHOLDER_NAME.to_string(),
        }
    }

    /// Use a different name for blank entries in ranked views
    pub fn with_placeholder_name(mut self, name: impl Into<String>) -> Self {
        self.placeholder_name = name.into();
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load all records in stored order.
    ///
    /// Missing, unreadable, empty or malformed data all yield an empty list.
    pub fn load(&self) -> ScoreList {
        self.load_checked().0
    }

    /// [`load`](Self::load), also reporting whether existing data was thrown away
    fn load_checked(&self) -> (ScoreList, Option<Discarded>) {
        let json = match self.storage.read() {
            Ok(Some(json)) => json,
            Ok(None) => {
                log::info!("No high scores at {}, starting fresh", self.storage.location());
                return (ScoreList::new(), None);
            }
            Err(err) => {
                log::warn!(
                    "Could not read high scores from {}: {}",
                    self.storage.location(),
                    err
                );
                return (ScoreList::new(), Some(Discarded::Unreadable));
            }
        };

        if json.trim().is_empty() {
            log::info!("High score file {} is empty", self.storage.location());
            return (ScoreList::new(), None);
        }

        match ScoreList::from_json(&json) {
            Ok(list) => {
                log::info!("Loaded {} high scores", list.len());
                (list, None)
            }
            Err(err) => {
                log::warn!(
                    "Ignoring malformed high scores in {}: {}",
                    self.storage.location(),
                    err
                );
                (ScoreList::new(), Some(Discarded::Malformed))
            }
        }
    }

    /// Record a finished run and return the resulting champion.
    ///
    /// Negative scores are rejected before storage is touched.
    pub fn append(&self, name: &str, score: i64) -> Result<Champion, StoreError> {
        let score = u64::try_from(score).map_err(|_| StoreError::NegativeScore(score))?;
        self.append_score(name, score)
    }

    /// [`append`](Self::append) for an already non-negative score
    pub fn append_score(&self, name: &str, score: u64) -> Result<Champion, StoreError> {
        let (mut list, discarded) = self.load_checked();
        if let Some(discarded) = discarded {
            log::warn!(
                "Replacing {:?} high scores at {} with a fresh list",
                discarded,
                self.storage.location()
            );
        }
        list.push(ScoreRecord::new(name, score));
        list.sort_descending();

        let json = list.to_json()?;
        self.storage
            .write(&json)
            .map_err(|source| StoreError::Write {
                location: self.storage.location(),
                source,
            })?;
        log::info!("High scores saved ({} entries)", list.len());

        // the list holds at least the record pushed above
        let champion = Champion::from(&list.entries[0]);
        log::debug!(
            "Recorded {:?} with {}; champion is {:?} with {}",
            name,
            score,
            champion.name,
            champion.score
        );
        Ok(champion)
    }

    /// Ranked view, best first, at most `limit` entries (`limit <= 0` means all).
    ///
    /// Ties keep stored order. Blank names are shown as the placeholder name.
    pub fn ranked_view(&self, limit: i64) -> Vec<RankedEntry> {
        let mut list = self.load();
        list.sort_descending();
        leaderboard::ranked_entries(&list, limit, &self.placeholder_name)
    }

    /// Top entry of the ranked view, if any score was ever recorded
    pub fn champion(&self) -> Option<Champion> {
        self.ranked_view(1).into_iter().next().map(Champion::from)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::platform::MemoryStorage;

    fn entry(rank: usize, name: &str, score: u64) -> RankedEntry {
        RankedEntry {
            rank,
            name: name.to_string(),
            score,
        }
    }

    fn store_with(json: &str) -> ScoreStore<MemoryStorage> {
        ScoreStore::new(MemoryStorage::with_contents(json))
    }

    #[test]
    fn test_load_missing_is_empty() {
        let store = ScoreStore::new(MemoryStorage::new());
        assert!(store.load().is_empty());
        assert!(store.ranked_view(0).is_empty());
        assert_eq!(store.champion(), None);
    }

    #[test]
    fn test_load_empty_or_malformed_is_empty() {
        assert!(store_with("").load().is_empty());
        assert!(store_with("   \n").load().is_empty());
        assert!(store_with("{ not json").load().is_empty());
        assert!(store_with("[1, 2, 3]").load().is_empty());
    }

    #[test]
    fn test_load_keeps_stored_order() {
        let store = store_with(
            r#"{"playerAndScoreList":[{"_name":"low","_score":1},{"_name":"high","_score":9}]}"#,
        );
        let names: Vec<_> = store.load().entries.into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["low", "high"]);
        assert_eq!(store.ranked_view(0)[0], entry(1, "high", 9));
    }

    #[test]
    fn test_first_append_is_champion() {
        let store = ScoreStore::new(MemoryStorage::new());
        let champ = store.append("Ann", 50).unwrap();
        let expected = Champion {
            name: "Ann".into(),
            score: 50,
        };
        assert_eq!(champ, expected);
        assert_eq!(store.champion(), Some(expected));
    }

    #[test]
    fn test_higher_score_takes_rank_one() {
        let store = ScoreStore::new(MemoryStorage::new());
        store.append("Ann", 50).unwrap();
        let champ = store.append("Bo", 80).unwrap();
        assert_eq!(champ.name, "Bo");
        assert_eq!(
            store.ranked_view(0),
            vec![entry(1, "Bo", 80), entry(2, "Ann", 50)]
        );
    }

    #[test]
    fn test_tie_keeps_append_order() {
        let store = ScoreStore::new(MemoryStorage::new());
        store.append("Ann", 50).unwrap();
        let champ = store.append("Cy", 50).unwrap();
        assert_eq!(champ.name, "Ann");
        assert_eq!(
            store.ranked_view(0),
            vec![entry(1, "Ann", 50), entry(2, "Cy", 50)]
        );
    }

    #[test]
    fn test_limit_one_of_five() {
        let store = ScoreStore::new(MemoryStorage::new());
        for (name, score) in [("a", 3), ("b", 7), ("c", 1), ("d", 9), ("e", 4)] {
            store.append(name, score).unwrap();
        }
        assert_eq!(store.ranked_view(1), vec![entry(1, "d", 9)]);
    }

    #[test]
    fn test_blank_name_shown_as_player() {
        let store = ScoreStore::new(MemoryStorage::new());
        store.append("", 30).unwrap();
        assert_eq!(store.ranked_view(0), vec![entry(1, "Player", 30)]);
        // stored as entered
        assert_eq!(store.load().entries[0].name, "");
    }

    #[test]
    fn test_custom_placeholder_name() {
        let store = ScoreStore::new(MemoryStorage::new()).with_placeholder_name("Anon");
        store.append(" ", 1).unwrap();
        assert_eq!(store.ranked_view(0)[0].name, "Anon");
    }

    #[test]
    fn test_negative_score_rejected() {
        let storage = MemoryStorage::new();
        let store = ScoreStore::new(&storage);
        store.append("Ann", 10).unwrap();
        let before = storage.contents();

        let err = store.append("X", -1).unwrap_err();
        assert!(matches!(err, StoreError::NegativeScore(-1)));
        assert_eq!(storage.contents(), before);
    }

    #[test]
    fn test_write_failure_surfaces_and_keeps_data() {
        let storage = MemoryStorage::new();
        let store = ScoreStore::new(&storage);
        store.append("Ann", 10).unwrap();
        let before = storage.contents();

        storage.set_fail_writes(true);
        let err = store.append("Bo", 99).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert_eq!(storage.contents(), before);
        assert_eq!(store.champion().map(|c| c.name), Some("Ann".to_string()));
    }

    #[test]
    fn test_append_over_malformed_file_starts_fresh() {
        let storage = MemoryStorage::with_contents("garbage");
        let store = ScoreStore::new(&storage);
        store.append("Ann", 5).unwrap();
        assert_eq!(store.ranked_view(0), vec![entry(1, "Ann", 5)]);
    }

    #[test]
    fn test_persisted_file_is_sorted() {
        let storage = MemoryStorage::new();
        let store = ScoreStore::new(&storage);
        store.append("Ann", 1).unwrap();
        store.append("Bo", 3).unwrap();
        store.append("Cy", 2).unwrap();

        let raw = ScoreList::from_json(&storage.contents().unwrap()).unwrap();
        let scores: Vec<_> = raw.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, [3, 2, 1]);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_backed_store() {
        use crate::platform::FileStorage;

        let dir = std::env::temp_dir().join(format!("brick-scores-store-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("savefile.json");
        let store = ScoreStore::new(FileStorage::new(&path));

        assert!(store.load().is_empty());
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "").unwrap();
        assert!(store.load().is_empty());

        store.append("Ann", 50).unwrap();
        store.append("Bo", 80).unwrap();
        assert_eq!(
            store.ranked_view(0),
            vec![entry(1, "Bo", 80), entry(2, "Ann", 50)]
        );

        // a fresh store over the same file sees the same data
        let reopened = ScoreStore::new(FileStorage::new(&path));
        assert_eq!(reopened.champion().map(|c| c.score), Some(80));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_unreadable_file_is_reported_then_replaced() {
        use crate::platform::FileStorage;

        let dir = std::env::temp_dir().join(format!("brick-scores-binary-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("savefile.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let store = ScoreStore::new(FileStorage::new(&path));

        let (list, discarded) = store.load_checked();
        assert!(list.is_empty());
        assert_eq!(discarded, Some(Discarded::Unreadable));

        store.append("Ann", 1).unwrap();
        assert_eq!(store.ranked_view(0), vec![entry(1, "Ann", 1)]);
        assert_eq!(store.load_checked().1, None);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_discarded_data_is_classified() {
        assert_eq!(store_with("{ not json").load_checked().1, Some(Discarded::Malformed));
        assert_eq!(store_with("").load_checked().1, None);
        assert_eq!(ScoreStore::new(MemoryStorage::new()).load_checked().1, None);
    }

    proptest! {
        #[test]
        fn prop_ranked_view_sorted_with_stable_ties(
            runs in prop::collection::vec(0i64..20, 0..24)
        ) {
            let store = ScoreStore::new(MemoryStorage::new());
            for (i, score) in runs.iter().enumerate() {
                store.append(&format!("p{i}"), *score).unwrap();
            }

            let view = store.ranked_view(0);
            prop_assert_eq!(view.len(), runs.len());
            for (i, pair) in view.windows(2).enumerate() {
                prop_assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    let a: usize = pair[0].name[1..].parse().unwrap();
                    let b: usize = pair[1].name[1..].parse().unwrap();
                    prop_assert!(a < b, "tie at rank {} out of append order", i + 1);
                }
            }
            for (i, e) in view.iter().enumerate() {
                prop_assert_eq!(e.rank, i + 1);
            }

            // viewing twice changes nothing
            prop_assert_eq!(store.ranked_view(0), view.clone());

            if let Some(first) = view.first() {
                let champ = store.champion().unwrap();
                prop_assert_eq!(&champ.name, &first.name);
                prop_assert_eq!(champ.score, first.score);
            }
        }

        #[test]
        fn prop_append_returns_top_of_next_load(
            scores in prop::collection::vec(0i64..1000, 1..16)
        ) {
            let store = ScoreStore::new(MemoryStorage::new());
            for (i, score) in scores.iter().enumerate() {
                let champ = store.append(&format!("p{i}"), *score).unwrap();
                let mut list = store.load();
                list.sort_descending();
                prop_assert_eq!(list.champion(), Some(champ));
            }
        }
    }
}
