use std::io;

/// Errors surfaced by score and settings persistence.
///
/// Read-side problems never show up here: unreadable or malformed data is
/// treated as an empty store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Score must not be negative, got {0}")]
    NegativeScore(i64),
    #[error("Cannot write to {location}: {source}")]
    Write {
        location: String,
        #[source]
        source: io::Error,
    },
    #[error("Cannot encode data: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
