//! Browser Storage Adapter
//!
//! `KeyValueStorage` over `window.localStorage`, with an in-memory fallback
//! for when the browser refuses access.

use log::warn;
use todo_store::{KeyValueStorage, MemoryStorage, StorageError};
use wasm_bindgen::JsValue;

/// Origin-scoped `localStorage`
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?;
        let inner = window
            .local_storage()
            .map_err(|err| StorageError::Unavailable(js_message(&err)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { inner })
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner
            .get_item(key)
            .map_err(|err| StorageError::Read(js_message(&err)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .set_item(key, value)
            .map_err(|err| StorageError::Write(js_message(&err)))
    }
}

/// Storage the app actually runs on
pub enum Backend {
    Browser(BrowserStorage),
    /// Session-only; used when `localStorage` cannot be opened
    Memory(MemoryStorage),
}

impl Backend {
    /// Open browser storage, falling back to memory
    ///
    /// The error is returned alongside the fallback so the view can tell the
    /// user nothing will survive a reload.
    pub fn open() -> (Self, Option<StorageError>) {
        match BrowserStorage::open() {
            Ok(storage) => (Backend::Browser(storage), None),
            Err(err) => {
                warn!("[STORAGE] {}; keeping todos in memory only", err);
                (Backend::Memory(MemoryStorage::new()), Some(err))
            }
        }
    }
}

impl KeyValueStorage for Backend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Backend::Browser(storage) => storage.get_item(key),
            Backend::Memory(storage) => storage.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Backend::Browser(storage) => storage.set_item(key, value),
            Backend::Memory(storage) => storage.set_item(key, value),
        }
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_delegates() {
        let backend = Backend::Memory(MemoryStorage::new());
        backend.set_item("todos", "[]").unwrap();
        assert_eq!(backend.get_item("todos").unwrap().as_deref(), Some("[]"));
    }
}
