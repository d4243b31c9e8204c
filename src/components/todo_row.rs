//! Todo Row Component
//!
//! A single todo with checkbox, text, and inline edit/delete controls.

use leptos::prelude::*;
use todo_store::{TodoAction, TodoItem};

use crate::context::AppContext;

/// One todo row
///
/// "Edit" swaps the text for an input pre-filled with the current text.
/// Save (or Enter) dispatches the edit; Cancel (or Escape) drops the draft
/// without touching the store.
#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let completed = item.completed;
    let id = StoredValue::new(item.id);
    let text = StoredValue::new(item.text);

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());

    let start_edit = move || {
        set_draft.set(text.get_value());
        set_editing.set(true);
    };

    let save = move || {
        let new_text = draft.get_untracked();
        let changed = ctx.dispatch(TodoAction::Edit {
            id: id.get_value(),
            text: new_text.clone(),
        });
        set_editing.set(stays_in_edit_mode(changed, &new_text));
    };

    let cancel = move || set_editing.set(false);

    view! {
        <li class=if completed { "item-row completed" } else { "item-row" }>
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |_| {
                    ctx.dispatch(TodoAction::Toggle { id: id.get_value() });
                }
            />

            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <span class=if completed { "item-text line-through" } else { "item-text" }>
                        {text.get_value()}
                    </span>
                    <button class="edit-btn" on:click=move |_| start_edit()>"Edit"</button>
                }
            >
                <input
                    type="text"
                    class="edit-input"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                        "Enter" => save(),
                        "Escape" => cancel(),
                        _ => {}
                    }
                />
                <button class="confirm-btn" on:click=move |_| save()>"Save"</button>
                <button class="cancel-btn" on:click=move |_| cancel()>"Cancel"</button>
            </Show>

            <button
                class="delete-btn"
                on:click=move |_| {
                    ctx.dispatch(TodoAction::Delete { id: id.get_value() });
                }
            >
                "Delete"
            </button>
        </li>
    }
}

/// A rejected blank edit keeps the field open so the draft is not lost
fn stays_in_edit_mode(changed: bool, draft: &str) -> bool {
    !changed && draft.trim().is_empty()
}
