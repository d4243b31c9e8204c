//! Todo Repository
//!
//! Persists the whole list as one JSON value under a single storage key.

use std::collections::HashSet;

use log::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::model::{TodoItem, TodoList};
use crate::storage::KeyValueStorage;

/// Full-list repository over a key-value backend
pub struct TodoRepository<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> TodoRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the persisted list
    ///
    /// Returns `Ok(None)` when nothing has been stored yet. Items with an empty
    /// or repeated id are dropped.
    pub fn load(&self) -> StoreResult<Option<TodoList>> {
        let Some(raw) = self.storage.get_item(&self.key).map_err(StoreError::Load)? else {
            debug!("[REPO] No value under '{}'", self.key);
            return Ok(None);
        };

        let items: Vec<TodoItem> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Malformed { source })?;
        debug!("[REPO] Loaded {} items from '{}'", items.len(), self.key);

        Ok(Some(sanitize(items)))
    }

    /// Overwrite the stored value with `list`
    pub fn save(&self, list: &TodoList) -> StoreResult<()> {
        let json = serde_json::to_string(list).map_err(StoreError::Serialize)?;
        self.storage
            .set_item(&self.key, &json)
            .map_err(StoreError::Persist)?;
        debug!("[REPO] Saved {} items to '{}'", list.len(), self.key);
        Ok(())
    }
}

fn sanitize(items: Vec<TodoItem>) -> TodoList {
    let mut seen = HashSet::new();
    let kept: Vec<TodoItem> = items
        .into_iter()
        .filter(|item| {
            if item.id.is_empty() {
                warn!("[REPO] Dropping stored item with empty id: {:?}", item.text);
                return false;
            }
            if !seen.insert(item.id.clone()) {
                warn!("[REPO] Dropping stored item with duplicate id {}", item.id);
                return false;
            }
            true
        })
        .collect();
    TodoList::from(kept)
}
