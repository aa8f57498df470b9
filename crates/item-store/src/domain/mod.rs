//! Domain Layer
//!
//! Item entity, form draft and store errors.

mod error;
mod item;

pub use error::{StoreError, StoreResult};
pub use item::{sample_items, Item, ItemDraft};
