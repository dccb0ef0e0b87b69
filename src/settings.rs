//! Leaderboard settings
//!
//! Persisted separately from the score file. Loading is lenient: a missing
//! or malformed settings document gives the defaults.

use serde::{Deserialize, Serialize};

use crate::leaderboard::{NO_CHAMPION_LABEL, PLACEHOLDER_NAME, Palette};
use crate::persistence::{ScoreStore, StoreError};
use crate::platform::Storage;
#[cfg(not(target_arch = "wasm32"))]
use crate::platform::FileStorage;
#[cfg(target_arch = "wasm32")]
use crate::platform::LocalStorage;

/// Default number of rows on the leaderboard screen
pub const DEFAULT_MAX_ENTRIES: i64 = 50;
/// Score file name inside the data directory
pub const SAVE_FILE_NAME: &str = "savefile.json";
/// Settings file name inside the data directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";
/// Directory under the host data directory
pub const APP_DIR: &str = "brick-scores";

/// Leaderboard settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Leaderboard ===
    /// Rows shown on the leaderboard screen (<= 0 shows every score)
    pub max_entries_to_show: i64,
    /// Shown instead of blank player names
    pub placeholder_name: String,
    /// Shown in the banner when there is no champion
    pub no_champion_label: String,
    /// Row colors
    pub palette: Palette,

    // === Storage ===
    /// Score file name
    pub save_file_name: String,
    /// Directory under the host data directory
    pub app_dir: String,
    /// Use this directory instead of `<data dir>/<app_dir>`
    pub data_dir: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_entries_to_show: DEFAULT_MAX_ENTRIES,
            placeholder_name: PLACEHOLDER_NAME.to_string(),
            no_champion_label: NO_CHAMPION_LABEL.to_string(),
            palette: Palette::default(),

            save_file_name: SAVE_FILE_NAME.to_string(),
            app_dir: APP_DIR.to_string(),
            data_dir: None,
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults
    pub fn load(storage: &impl Storage) -> Self {
        match storage.read() {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", storage.location());
                    return settings;
                }
                Err(err) => log::warn!("Ignoring malformed settings: {err}"),
            },
            Ok(None) => {}
            Err(err) => log::warn!("Could not read settings: {err}"),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings
    pub fn save(&self, storage: &impl Storage) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        storage.write(&json).map_err(|source| StoreError::Write {
            location: storage.location(),
            source,
        })?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Settings file in the default data directory
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_storage() -> Result<FileStorage, StoreError> {
        FileStorage::in_data_dir(APP_DIR, SETTINGS_FILE_NAME)
            .ok_or_else(|| StoreError::Unavailable("no data directory on this host".to_string()))
    }

    /// Where the score file lives
    #[cfg(not(target_arch = "wasm32"))]
    pub fn score_storage(&self) -> Result<FileStorage, StoreError> {
        match &self.data_dir {
            Some(dir) => Ok(FileStorage::new(
                std::path::Path::new(dir).join(&self.save_file_name),
            )),
            None => FileStorage::in_data_dir(&self.app_dir, &self.save_file_name).ok_or_else(
                || StoreError::Unavailable("no data directory on this host".to_string()),
            ),
        }
    }

    /// Settings key in LocalStorage
    #[cfg(target_arch = "wasm32")]
    pub fn default_storage() -> Result<LocalStorage, StoreError> {
        Ok(LocalStorage::new(format!("{APP_DIR}/{SETTINGS_FILE_NAME}")))
    }

    /// Score key in LocalStorage
    #[cfg(target_arch = "wasm32")]
    pub fn score_storage(&self) -> Result<LocalStorage, StoreError> {
        Ok(LocalStorage::new(format!(
            "{}/{}",
            self.app_dir, self.save_file_name
        )))
    }

    /// Score store for the configured location
    #[cfg(not(target_arch = "wasm32"))]
    pub fn score_store(&self) -> Result<ScoreStore<FileStorage>, StoreError> {
        Ok(ScoreStore::new(self.score_storage()?).with_placeholder_name(&self.placeholder_name))
    }

    /// Score store for the configured location
    #[cfg(target_arch = "wasm32")]
    pub fn score_store(&self) -> Result<ScoreStore<LocalStorage>, StoreError> {
        Ok(ScoreStore::new(self.score_storage()?).with_placeholder_name(&self.placeholder_name))
    }
}
