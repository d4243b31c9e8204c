//! Storage Notice Component
//!
//! Dismissible banner for non-fatal persistence problems.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn StorageNotice() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let notice = move || ctx.state.notice().get();

    view! {
        <Show when=move || notice().is_some()>
            <div class="storage-notice">
                <span class="storage-notice-text">{move || notice().unwrap_or_default()}</span>
                <button class="dismiss-btn" on:click=move |_| ctx.clear_notice()>
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
