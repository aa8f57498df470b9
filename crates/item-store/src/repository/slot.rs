//! Persistent Slot
//!
//! A single named value holding the whole serialized item list.
//! Reads and writes are whole-value; there is no indexed access.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};

use crate::domain::{Item, StoreError, StoreResult};

/// Whole-value storage for the item list
pub trait Slot {
    /// Read the list; `None` when the slot was never written
    fn load(&self) -> StoreResult<Option<Vec<Item>>>;

    /// Replace the stored list
    fn save(&self, items: &[Item]) -> StoreResult<()>;
}

/// Browser `localStorage` under a fixed key
#[derive(Debug, Clone)]
pub struct LocalStorageSlot {
    key: String,
}

impl LocalStorageSlot {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Slot for LocalStorageSlot {
    fn load(&self) -> StoreResult<Option<Vec<Item>>> {
        match LocalStorage::get::<Vec<Item>>(&self.key) {
            Ok(items) => Ok(Some(items)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(e)) => Err(StoreError::Corrupt(e.to_string())),
            Err(e) => Err(StoreError::Unavailable(e.to_string())),
        }
    }

    fn save(&self, items: &[Item]) -> StoreResult<()> {
        LocalStorage::set(&self.key, items).map_err(|e| match e {
            StorageError::SerdeError(e) => StoreError::Corrupt(e.to_string()),
            other => StoreError::Unavailable(other.to_string()),
        })
    }
}

/// In-memory slot holding raw text
///
/// Clones share the same cell, so a test can keep a handle and inspect
/// or corrupt what the repository persisted.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    raw: Rc<RefCell<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with arbitrary text, valid or not
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let slot = Self::new();
        slot.set_raw(raw);
        slot
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }

    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.raw.borrow_mut() = Some(raw.into());
    }
}

impl Slot for MemorySlot {
    fn load(&self) -> StoreResult<Option<Vec<Item>>> {
        match self.raw.borrow().as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, items: &[Item]) -> StoreResult<()> {
        let raw = serde_json::to_string(items)?;
        *self.raw.borrow_mut() = Some(raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_slot_loads_none() {
        assert_eq!(MemorySlot::new().load().unwrap(), None);
    }

    #[test]
    fn test_saved_list_reloads_equal() {
        let slot = MemorySlot::new();
        let items = vec![
            Item::new(3, "Third", "with \"quotes\"\nand a newline"),
            Item::new(1, "First", ""),
        ];
        slot.save(&items).unwrap();
        assert_eq!(slot.load().unwrap(), Some(items));
    }

    #[test]
    fn test_serialized_field_names() {
        let slot = MemorySlot::new();
        slot.save(&[Item::new(1, "A", "B")]).unwrap();
        assert_eq!(
            slot.raw().unwrap(),
            r#"[{"id":1,"name":"A","description":"B"}]"#
        );
    }

    #[test]
    fn test_garbage_is_corrupt() {
        let slot = MemorySlot::with_raw("{not json");
        assert!(matches!(slot.load(), Err(StoreError::Corrupt(_))));

        let slot = MemorySlot::with_raw(r#"{"id":1}"#);
        assert!(matches!(slot.load(), Err(StoreError::Corrupt(_))));
    }
}
