//! CRUD Demo App
//!
//! Single page: header, action bar with the form, item list, stats footer.

use std::rc::Rc;

use item_store::{ItemRepository, LocalStorageSlot, StoreConfig};
use leptos::prelude::*;

use crate::components::{ItemForm, ItemList};
use crate::context::{use_app_context, AppContext};
use crate::controller::ItemController;
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = AppStore::new(AppState::new());

    // Simulated backend over localStorage
    let config = StoreConfig::default();
    let slot = LocalStorageSlot::new(config.storage_key.clone());
    log::info!("using localStorage slot '{}'", slot.key());
    let repo = Rc::new(ItemRepository::new(slot, config));

    let ctx = AppContext::new(store, ItemController::new(repo, store));
    provide_context(ctx);

    // Load items on mount
    Effect::new(move |_| ctx.reload());

    view! {
        <div class="page">
            <div class="container">
                <header class="page-header">
                    <h1>"CRUD Operations Demo"</h1>
                    <p>"Create, Read, Update, and Delete items with this simple interface"</p>
                </header>

                <main class="main-content">
                    <ActionBar />
                    <ItemList />

                    <p class="stats-footer">
                        {move || format!(
                            "Total items: {} | CRUD Operations: Create, Read, Update, Delete",
                            store.items().with(|items| items.len()),
                        )}
                    </p>
                </main>
            </div>
        </div>
    }
}

/// Heading, "Add Item" button and, when open, the form
#[component]
fn ActionBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <section class="action-bar">
            <div class="action-bar-row">
                <h2>{move || store.with(|s| s.heading())}</h2>
                <Show when=move || !store.show_form().get()>
                    <button class="primary-btn" on:click=move |_| ctx.open_form()>
                        "+ Add Item"
                    </button>
                </Show>
            </div>

            <Show when=move || store.show_form().get()>
                <ItemForm />
            </Show>
        </section>
    }
}
