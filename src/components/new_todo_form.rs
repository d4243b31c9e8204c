//! New Todo Form Component
//!
//! Text input plus submit button for appending todos.

use leptos::prelude::*;
use todo_store::TodoAction;

use crate::context::AppContext;

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Draft text is transient and never persisted
    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        if ctx.dispatch(TodoAction::Add { text }) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="Enter new todo"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add Todo"</button>
        </form>
    }
}
