//! Todo App
//!
//! Main application component: hydrates the store once, then lays out the
//! form, the list and the storage notice.

use leptos::prelude::*;
use log::info;
use reactive_stores::Store;
use todo_store::{StoreConfig, TodoStore};

use crate::components::{NewTodoForm, StorageNotice, TodoList};
use crate::context::{startup_notice, AppContext};
use crate::storage::Backend;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Hydrate once on mount
    let (backend, unavailable) = Backend::open();
    let (todos, hydration) = TodoStore::hydrate(backend, StoreConfig::default());
    info!("[APP] Hydrated: {:?}", hydration);

    let state = Store::new(AppState {
        todos: todos.items().to_vec(),
        notice: startup_notice(unavailable.as_ref(), &hydration),
    });

    provide_context(AppContext::new(todos, state));

    let summary = move || {
        let todos = state.todos().get();
        let completed = todos.iter().filter(|item| item.completed).count();
        summary_text(todos.len(), completed)
    };

    view! {
        <div class="app-layout">
            <h1 class="app-title">"Todo App"</h1>

            <StorageNotice />

            <NewTodoForm />

            <TodoList />

            <p class="item-count">{summary}</p>
        </div>
    }
}

fn summary_text(total: usize, completed: usize) -> String {
    let noun = if total == 1 { "item" } else { "items" };
    format!("{} {}, {} completed", total, noun, completed)
}
