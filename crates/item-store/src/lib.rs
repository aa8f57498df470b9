//! Item Store
//!
//! Simulated backend for the CRUD demo: a single persistent slot holding
//! the whole item list, with artificial latency in front of every call.
//!
//! Layers:
//! - domain: Item, form draft and errors
//! - repository: slot abstraction, latency and the CRUD repository

pub mod domain;
pub mod repository;

pub use domain::{sample_items, Item, ItemDraft, StoreError, StoreResult};
pub use repository::{
    ItemRepository, LocalStorageSlot, MemorySlot, Repository, Slot, StoreConfig,
};
