//! Palette persistence.
//!
//! A palette file is a JSON array of "slots". Slot 0 holds the colors; later
//! slots are kept for other saved data and passed through untouched.

mod document;
mod file;
mod memory;

pub use document::{PersistedDocument, SaveOption};
pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Format error: {0}")]
    Format(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A place a palette document can be loaded from and saved to.
///
/// Calls are blocking; the tool only touches storage on startup and on
/// explicit save or reload.
pub trait DocumentStorage {
    /// Read and parse the whole document.
    fn load(&self) -> StorageResult<PersistedDocument>;

    /// Replace the stored document.
    ///
    /// A failed save must leave the previously stored document intact.
    fn save(&self, document: &PersistedDocument) -> StorageResult<()>;

    /// Human readable location, used in log lines and the status bar.
    fn describe(&self) -> String;
}
