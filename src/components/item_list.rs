//! Item List Component
//!
//! Loading spinner, error panel with Retry, empty state or the rows.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::use_app_context;
use crate::store::{AppStateStoreFields, ListStatus};

/// List panel
#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let status = move || store.with(|s| s.list_status());

    view! {
        <div class="list-panel">
            {move || match status() {
                ListStatus::Loading => view! {
                    <div class="list-placeholder">
                        <div class="spinner"></div>
                        <p>"Loading items..."</p>
                    </div>
                }.into_any(),
                ListStatus::Failed(error) => view! {
                    <div class="list-placeholder">
                        <div class="list-error">"⚠️ " {error.to_string()}</div>
                        <button class="primary-btn" on:click=move |_| ctx.reload()>"Retry"</button>
                    </div>
                }.into_any(),
                ListStatus::Empty => view! {
                    <div class="list-placeholder">
                        <div class="empty-icon">"📭"</div>
                        <h3>"No items found"</h3>
                        <p>"Get started by adding your first item"</p>
                    </div>
                }.into_any(),
                ListStatus::Ready => view! {
                    <div class="item-rows">
                        <For
                            each=move || store.items().get()
                            // Key on every field so an edit re-renders the row
                            key=|item| (item.id, item.name.clone(), item.description.clone())
                            children=move |item| view! { <ItemRow item=item /> }
                        />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
