//! Item Repository
//!
//! Read-modify-write of the whole list in a [`Slot`], each call delayed to
//! mimic a network round trip.

use async_trait::async_trait;

use super::config::StoreConfig;
use super::latency::simulate;
use super::slot::Slot;
use super::traits::Repository;
use crate::domain::{Item, ItemDraft, StoreError, StoreResult};

/// Slot-backed implementation of [`Repository`]
pub struct ItemRepository<S: Slot> {
    slot: S,
    config: StoreConfig,
}

impl<S: Slot> ItemRepository<S> {
    pub fn new(slot: S, config: StoreConfig) -> Self {
        Self { slot, config }
    }

    /// Stored list, absent treated as empty
    fn load_or_empty(&self) -> StoreResult<Vec<Item>> {
        Ok(self.slot.load()?.unwrap_or_default())
    }
}

/// One above the highest id, or 1 for an empty list
pub fn next_id(items: &[Item]) -> StoreResult<u32> {
    match items.iter().map(|item| item.id).max() {
        Some(max) => max.checked_add(1).ok_or(StoreError::IdsExhausted),
        None => Ok(1),
    }
}

#[async_trait(?Send)]
impl<S: Slot + 'static> Repository for ItemRepository<S> {
    async fn list(&self) -> StoreResult<Vec<Item>> {
        simulate(self.config.list_delay).await;

        match self.slot.load()? {
            Some(items) => {
                log::debug!("listed {} items", items.len());
                Ok(items)
            }
            None => {
                let seed = self.config.seed.clone();
                self.slot.save(&seed)?;
                log::info!("seeded empty store with {} sample items", seed.len());
                Ok(seed)
            }
        }
    }

    async fn create(&self, draft: &ItemDraft) -> StoreResult<Item> {
        simulate(self.config.write_delay).await;

        let mut items = self.load_or_empty()?;
        let item = Item::from_draft(next_id(&items)?, draft);
        items.push(item.clone());
        self.slot.save(&items)?;

        log::debug!("created item {}", item.id);
        Ok(item)
    }

    async fn update(&self, id: u32, draft: &ItemDraft) -> StoreResult<Option<Item>> {
        simulate(self.config.write_delay).await;

        let mut items = self.load_or_empty()?;
        let updated = items.iter_mut().find(|item| item.id == id).map(|item| {
            item.merge(draft);
            item.clone()
        });
        self.slot.save(&items)?;

        match &updated {
            Some(_) => log::debug!("updated item {}", id),
            None => log::warn!("update of unknown item {} ignored", id),
        }
        Ok(updated)
    }

    async fn delete(&self, id: u32) -> StoreResult<()> {
        simulate(self.config.write_delay).await;

        let mut items = self.load_or_empty()?;
        let before = items.len();
        items.retain(|item| item.id != id);
        self.slot.save(&items)?;

        if items.len() == before {
            log::warn!("delete of unknown item {} ignored", id);
        } else {
            log::debug!("deleted item {}", id);
        }
        Ok(())
    }
}
