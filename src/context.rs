//! Application Context
//!
//! Shared state provided via Leptos Context API.

use item_store::Item;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::ItemController;
use crate::store::AppStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive app state
    pub store: AppStore,
    /// Controller lives on this thread only (holds an `Rc` repository)
    controller: StoredValue<ItemController<AppStore>, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, controller: ItemController<AppStore>) -> Self {
        Self {
            store,
            controller: StoredValue::new_local(controller),
        }
    }

    /// Re-list items from the store (initial load and Retry)
    pub fn reload(&self) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.load_items().await;
        });
    }

    /// Submit the form draft
    pub fn submit(&self) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.submit().await;
        });
    }

    pub fn delete(&self, id: u32) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.delete(id).await;
        });
    }

    pub fn open_form(&self) {
        self.controller.with_value(|c| c.open_form());
    }

    pub fn edit(&self, item: &Item) {
        self.controller.with_value(|c| c.edit(item));
    }

    pub fn cancel(&self) {
        self.controller.with_value(|c| c.cancel());
    }

    pub fn set_name(&self, name: String) {
        self.controller.with_value(|c| c.set_name(name));
    }

    pub fn set_description(&self, description: String) {
        self.controller.with_value(|c| c.set_description(description));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
