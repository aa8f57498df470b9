//! Item Controller
//!
//! Runs each UI action against the repository and records the outcome in
//! the app state. State access goes through [`StateCell`] so the browser
//! uses the reactive store while tests use a plain `RefCell`.

use std::rc::Rc;

use item_store::{Item, Repository};
use leptos::prelude::*;

use crate::errors::UiError;
use crate::store::{AppState, AppStore, Submission};

/// Somewhere the app state lives
pub trait StateCell: Clone + 'static {
    /// Mutate the state, notifying readers
    fn apply(&self, f: impl FnOnce(&mut AppState));
}

impl StateCell for AppStore {
    fn apply(&self, f: impl FnOnce(&mut AppState)) {
        self.update(f);
    }
}

/// Glue between UI events, the repository and the state
pub struct ItemController<C: StateCell> {
    repo: Rc<dyn Repository>,
    state: C,
}

impl<C: StateCell> Clone for ItemController<C> {
    fn clone(&self) -> Self {
        Self {
            repo: Rc::clone(&self.repo),
            state: self.state.clone(),
        }
    }
}

impl<C: StateCell> ItemController<C> {
    pub fn new(repo: Rc<dyn Repository>, state: C) -> Self {
        Self { repo, state }
    }

    /// List from the store, replacing the shown items (also Retry)
    pub async fn load_items(&self) {
        self.state.apply(AppState::begin_load);
        let result = self.repo.list().await;
        if let Err(e) = &result {
            log::error!("loading items failed: {}", e);
        }
        self.state.apply(|s| s.finish_load(result));
    }

    /// Create or update from the form draft, then reload
    pub async fn submit(&self) {
        let mut submission = None;
        self.state.apply(|s| submission = s.prepare_submit());
        let Some(submission) = submission else {
            return;
        };

        let outcome = match &submission {
            Submission::Create(draft) => self.repo.create(draft).await.map(|item| {
                log::info!("created item {}", item.id);
            }),
            Submission::Update(id, draft) => self.repo.update(*id, draft).await.map(|updated| {
                if updated.is_none() {
                    log::warn!("item {} vanished before update", id);
                }
            }),
        };

        match outcome {
            Ok(()) => {
                self.state.apply(AppState::finish_submit);
                self.load_items().await;
            }
            Err(e) => {
                log::error!("submit failed: {}", e);
                self.state.apply(|s| s.fail(UiError::Operation));
            }
        }
    }

    /// Delete `id`, then reload
    pub async fn delete(&self, id: u32) {
        let mut started = false;
        self.state.apply(|s| started = s.begin_delete());
        if !started {
            return;
        }

        match self.repo.delete(id).await {
            Ok(()) => self.load_items().await,
            Err(e) => {
                log::error!("deleting item {} failed: {}", id, e);
                self.state.apply(|s| s.fail(UiError::Delete));
            }
        }
    }

    pub fn open_form(&self) {
        self.state.apply(AppState::open_form);
    }

    pub fn edit(&self, item: &Item) {
        self.state.apply(|s| s.begin_edit(item));
    }

    pub fn cancel(&self) {
        self.state.apply(AppState::cancel);
    }

    pub fn set_name(&self, name: String) {
        self.state.apply(|s| s.set_name(name));
    }

    pub fn set_description(&self, description: String) {
        self.state.apply(|s| s.set_description(description));
    }
}
