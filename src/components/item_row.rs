//! Item Row Component
//!
//! One item in the list with its edit and delete actions.

use item_store::Item;
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;

/// A single item row
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id;
    let name = item.name.clone();
    let description = item.description.clone();

    view! {
        <div class="item-row">
            <div class="item-body">
                <h3 class="item-name">{name}</h3>
                <p class="item-description">{description}</p>
                <div class="item-id">"ID: " {id}</div>
            </div>

            <div class="item-actions">
                <button class="edit-btn" on:click=move |_| ctx.edit(&item)>
                    "✎ "
                    <span class="btn-label">"Edit"</span>
                </button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=move |_| ctx.delete(id)
                />
            </div>
        </div>
    }
}
