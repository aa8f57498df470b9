//! Repository Layer - Core Trait
//!
//! The four operations the simulated backend exposes to the UI.

use async_trait::async_trait;

use crate::domain::{Item, ItemDraft, StoreResult};

/// CRUD access to the item list
///
/// Futures are `!Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait Repository {
    /// All items in persisted order, seeding an empty store first
    async fn list(&self) -> StoreResult<Vec<Item>>;

    /// Append a new item with the next free id
    async fn create(&self, draft: &ItemDraft) -> StoreResult<Item>;

    /// Merge `draft` into the item with `id`; `None` when no item matched
    async fn update(&self, id: u32, draft: &ItemDraft) -> StoreResult<Option<Item>>;

    /// Remove the item with `id`, if any
    async fn delete(&self, id: u32) -> StoreResult<()>;
}
