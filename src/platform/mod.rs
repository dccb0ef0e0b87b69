//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (a file under the data directory natively, LocalStorage on web)

pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
pub use storage::{MemoryStorage, Storage};
