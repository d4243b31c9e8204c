//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use log::debug;
use todo_store::{Hydration, StorageError, StoreError, TodoAction, TodoStore};

use crate::storage::Backend;
use crate::store::{store_clear_notice, store_set_notice, store_set_todos, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Persistent todo store; the storage handle is not `Send`, so it lives
    /// in local storage
    todos: StoredValue<TodoStore<Backend>, LocalStorage>,
    /// Rendered view state
    pub state: AppStore,
}

impl AppContext {
    pub fn new(todos: TodoStore<Backend>, state: AppStore) -> Self {
        Self {
            todos: StoredValue::new_local(todos),
            state,
        }
    }

    /// Run an action through the store and re-render
    ///
    /// Returns whether the in-memory list changed. A failed write still
    /// counts as a change; it only raises a notice.
    pub fn dispatch(&self, action: TodoAction) -> bool {
        debug!("[APP] Dispatch {:?}", action);
        let Some(result) = self.todos.try_update_value(|store| store.apply(action)) else {
            return false;
        };

        let changed = match result {
            Ok(changed) => changed,
            Err(err) => {
                store_set_notice(&self.state, persist_notice(&err));
                true
            }
        };

        if changed {
            let snapshot = self.todos.with_value(|store| store.items().to_vec());
            store_set_todos(&self.state, snapshot);
        }
        changed
    }

    pub fn clear_notice(&self) {
        store_clear_notice(&self.state);
    }
}

/// Notice for the startup path, if anything went wrong
pub fn startup_notice(unavailable: Option<&StorageError>, hydration: &Hydration) -> Option<String> {
    if unavailable.is_some() {
        return Some(
            "Browser storage is unavailable. Your todos will be lost when this page closes."
                .to_string(),
        );
    }
    match hydration {
        Hydration::Discarded(_) => {
            Some("Saved todos could not be read; starting with an empty list.".to_string())
        }
        Hydration::Empty | Hydration::Restored { .. } => None,
    }
}

pub fn persist_notice(err: &StoreError) -> String {
    format!("Could not save your todos ({}). Changes are kept until this page closes.", err)
}
