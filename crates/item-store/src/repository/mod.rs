//! Repository Layer
//!
//! Persistent slot, simulated latency and the item repository on top.

mod config;
mod item_repo;
mod latency;
mod slot;
mod traits;


pub use config::{StoreConfig, DEFAULT_LIST_DELAY, DEFAULT_STORAGE_KEY, DEFAULT_WRITE_DELAY};
pub use item_repo::{next_id, ItemRepository};
pub use latency::simulate;
pub use slot::{LocalStorageSlot, MemorySlot, Slot};
pub use traits::Repository;
