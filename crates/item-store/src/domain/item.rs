//! Item Entity
//!
//! A flat record with an id, a required name and a free-form description.

use serde::{Deserialize, Serialize};

/// A stored item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned on create
    pub id: u32,
    /// Display name (required by the form)
    pub name: String,
    /// Optional description, empty when omitted
    #[serde(default)]
    pub description: String,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Build a fresh item from a form draft
    pub fn from_draft(id: u32, draft: &ItemDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
        }
    }

    /// Shallow merge: every draft field overwrites, the id stays
    pub fn merge(&mut self, draft: &ItemDraft) {
        self.name = draft.name.clone();
        self.description = draft.description.clone();
    }
}

/// Editable fields of an item, as held by the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Name is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
        }
    }
}

/// The two items written into an empty store on first list
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new(1, "Sample Item 1", "This is a sample item description"),
        Item::new(2, "Sample Item 2", "Another sample item for demonstration"),
    ]
}
