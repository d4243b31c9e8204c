//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::AppContext;
use crate::store::AppStateStoreFields;

/// Renders one row per todo, in insertion order
#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <ul class="todo-list">
            <For
                each=move || ctx.state.todos().get()
                // Key on every mutable field so edits and toggles re-render
                key=|item| (item.id.clone(), item.text.clone(), item.completed)
                children=move |item| view! { <TodoRow item=item /> }
            />
        </ul>
    }
}
