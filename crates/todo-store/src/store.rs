//! Todo Store
//!
//! Owns the in-memory list and writes it through the repository after every
//! change. The in-memory list is the single source of truth: a failed write
//! never rolls it back, and no operation re-reads storage after hydration.

use log::{info, warn};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::model::{TodoId, TodoItem, TodoList};
use crate::reducer::{reduce, TodoAction};
use crate::repository::TodoRepository;
use crate::storage::KeyValueStorage;

/// What hydration found in storage
#[derive(Debug)]
pub enum Hydration {
    /// Nothing stored yet
    Empty,
    /// A stored list was adopted
    Restored { count: usize },
    /// Stored data was unreadable and ignored; the store starts empty
    Discarded(StoreError),
}

pub struct TodoStore<S> {
    repo: TodoRepository<S>,
    list: TodoList,
    config: StoreConfig,
}

impl<S: KeyValueStorage> TodoStore<S> {
    /// Read the persisted list once and build a store around it
    ///
    /// Never fails: unreadable data yields an empty store and
    /// `Hydration::Discarded`.
    pub fn hydrate(storage: S, config: StoreConfig) -> (Self, Hydration) {
        let repo = TodoRepository::new(storage, config.storage_key.clone());
        let (list, hydration) = match repo.load() {
            Ok(Some(list)) => {
                info!("[STORE] Restored {} todos", list.len());
                let count = list.len();
                (list, Hydration::Restored { count })
            }
            Ok(None) => (TodoList::new(), Hydration::Empty),
            Err(err) => {
                warn!("[STORE] Ignoring stored todos: {}", err);
                (TodoList::new(), Hydration::Discarded(err))
            }
        };

        (Self { repo, list, config }, hydration)
    }

    /// Apply an action and persist the result
    ///
    /// Returns `Ok(false)` without writing when the action changed nothing.
    /// On `Err` the in-memory list already reflects the action; only the
    /// write was lost.
    pub fn apply(&mut self, action: TodoAction) -> StoreResult<bool> {
        if !reduce(&mut self.list, action, &self.config) {
            return Ok(false);
        }
        if let Err(err) = self.repo.save(&self.list) {
            warn!("[STORE] {}", err);
            return Err(err);
        }
        Ok(true)
    }

    /// Add an item, returning its id, or `None` for blank text
    ///
    /// When the write fails the item is still appended in memory but the
    /// `Err` carries no id; read it back with `items().last()`.
    pub fn add(&mut self, text: impl Into<String>) -> StoreResult<Option<TodoId>> {
        let changed = self.apply(TodoAction::Add { text: text.into() })?;
        Ok(changed.then(|| self.last_id()).flatten())
    }

    pub fn toggle(&mut self, id: &TodoId) -> StoreResult<bool> {
        self.apply(TodoAction::Toggle { id: id.clone() })
    }

    pub fn edit(&mut self, id: &TodoId, text: impl Into<String>) -> StoreResult<bool> {
        self.apply(TodoAction::Edit {
            id: id.clone(),
            text: text.into(),
        })
    }

    pub fn delete(&mut self, id: &TodoId) -> StoreResult<bool> {
        self.apply(TodoAction::Delete { id: id.clone() })
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn items(&self) -> &[TodoItem] {
        self.list.items()
    }

    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.list.get(id)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.list.completed_count()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        self.repo.storage()
    }

    fn last_id(&self) -> Option<TodoId> {
        self.list.items().last().map(|item| item.id.clone())
    }
}
