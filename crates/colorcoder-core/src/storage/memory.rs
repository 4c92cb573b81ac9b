//! In-memory storage implementation.

use super::{DocumentStorage, PersistedDocument, StorageError, StorageResult};
use std::cell::{Cell, RefCell};

/// In-memory storage for testing and ephemeral use.
///
/// Documents are kept in their serialized form so loads go through the same
/// parser as files do.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    json: RefCell<Option<String>>,
    fail_saves: Cell<bool>,
}

impl MemoryStorage {
    /// Create an empty memory storage. Loading from it fails until something is saved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory storage holding `json`.
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            json: RefCell::new(Some(json.into())),
            fail_saves: Cell::new(false),
        }
    }

    /// The currently stored JSON, if any.
    pub fn json(&self) -> Option<String> {
        self.json.borrow().clone()
    }

    /// Make subsequent saves fail with an IO error.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }
}

impl DocumentStorage for MemoryStorage {
    fn load(&self) -> StorageResult<PersistedDocument> {
        let json = self.json.borrow();
        let json = json
            .as_deref()
            .ok_or_else(|| StorageError::Io("nothing stored in memory".to_string()))?;
        PersistedDocument::from_json(json)
    }

    fn save(&self, document: &PersistedDocument) -> StorageResult<()> {
        if self.fail_saves.get() {
            return Err(StorageError::Io("memory storage is read-only".to_string()));
        }
        let json = document.to_json()?;
        *self.json.borrow_mut() = Some(json);
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
