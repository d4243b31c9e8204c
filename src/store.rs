//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the rendered
//! snapshot of the todo list.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_store::TodoItem;

/// State the view renders from
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Snapshot of the todo list, in display order
    pub todos: Vec<TodoItem>,
    /// Latest storage notice, if any
    pub notice: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the rendered todo snapshot
pub fn store_set_todos(store: &AppStore, todos: Vec<TodoItem>) {
    *store.todos().write() = todos;
}

pub fn store_set_notice(store: &AppStore, notice: String) {
    *store.notice().write() = Some(notice);
}

pub fn store_clear_notice(store: &AppStore) {
    *store.notice().write() = None;
}
