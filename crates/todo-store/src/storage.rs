//! Key-Value Storage
//!
//! Abstract string storage the repository writes through. The browser's
//! `localStorage` is one implementation; `MemoryStorage` is another.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use thiserror::Error;

/// Backend failures, carrying the backend's own message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// String key-value storage
///
/// Methods take `&self`; implementations use interior mutability the way the
/// browser storage API does. Single-threaded use only.
pub trait KeyValueStorage {
    /// Read the value under `key`, `None` when absent
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// In-process storage, lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    /// Make every subsequent write fail, as a full quota would
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Current raw value under `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write("quota exceeded".to_string()));
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
