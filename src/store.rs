//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The transition
//! methods are plain Rust so the same state machine runs in unit tests.

use item_store::{Item, ItemDraft, StoreResult};
use reactive_stores::Store;

use crate::errors::UiError;

/// Everything the page renders from
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Items as last listed from the store
    pub items: Vec<Item>,
    /// A store call is in flight
    pub loading: bool,
    /// Message of the last failure, kept until the next action clears it
    pub error: Option<UiError>,
    /// Form view instead of list-only view
    pub show_form: bool,
    /// Item being edited (None = creating)
    pub editing_id: Option<u32>,
    /// Form fields
    pub draft: ItemDraft,
}

/// Store call a valid form submission turns into
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Create(ItemDraft),
    Update(u32, ItemDraft),
}

/// What the list panel shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Failed(UiError),
    Empty,
    Ready,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

impl AppState {
    /// Initial state: the first list is about to run
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(&mut self, result: StoreResult<Vec<Item>>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(_) => self.error = Some(UiError::Load),
        }
        self.loading = false;
    }

    /// Show the form in create mode
    pub fn open_form(&mut self) {
        self.show_form = true;
    }

    /// Show the form pre-filled with `item`
    pub fn begin_edit(&mut self, item: &Item) {
        self.draft = ItemDraft::from(item);
        self.editing_id = Some(item.id);
        self.show_form = true;
    }

    pub fn cancel(&mut self) {
        self.close_form();
        self.error = None;
    }

    pub fn set_name(&mut self, name: String) {
        self.draft.name = name;
    }

    pub fn set_description(&mut self, description: String) {
        self.draft.description = description;
    }

    /// Validate the draft and enter loading
    ///
    /// Returns `None` without touching `loading` when the name is blank
    /// (error set) or another call is still in flight.
    pub fn prepare_submit(&mut self) -> Option<Submission> {
        if self.draft.is_blank() {
            self.error = Some(UiError::Validation);
            return None;
        }
        if self.loading {
            return None;
        }
        self.loading = true;
        let draft = self.draft.clone();
        Some(match self.editing_id {
            Some(id) => Submission::Update(id, draft),
            None => Submission::Create(draft),
        })
    }

    /// Successful create/update; the caller reloads next
    pub fn finish_submit(&mut self) {
        self.close_form();
        self.error = None;
    }

    /// Enter loading for a delete; `false` when busy
    pub fn begin_delete(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    pub fn fail(&mut self, error: UiError) {
        self.error = Some(error);
        self.loading = false;
    }

    fn close_form(&mut self) {
        self.draft = ItemDraft::default();
        self.show_form = false;
        self.editing_id = None;
    }

    pub fn heading(&self) -> &'static str {
        match (self.show_form, self.editing_id) {
            (true, Some(_)) => "Edit Item",
            (true, None) => "Add New Item",
            (false, _) => "Items List",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing_id.is_some() { "Update" } else { "Save" }
    }

    pub fn list_status(&self) -> ListStatus {
        if self.loading {
            ListStatus::Loading
        } else if let Some(error) = self.error {
            ListStatus::Failed(error)
        } else if self.items.is_empty() {
            ListStatus::Empty
        } else {
            ListStatus::Ready
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use item_store::{sample_items, StoreError};

    fn loaded() -> AppState {
        let mut state = AppState::new();
        state.finish_load(Ok(sample_items()));
        state
    }

    #[test]
    fn test_starts_loading() {
        let state = AppState::new();
        assert!(state.loading);
        assert_eq!(state.list_status(), ListStatus::Loading);
        assert_eq!(state.heading(), "Items List");
    }

    #[test]
    fn test_load_success_and_failure() {
        let mut state = loaded();
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.list_status(), ListStatus::Ready);

        state.begin_load();
        state.finish_load(Err(StoreError::Corrupt("bad".into())));
        assert_eq!(state.error, Some(UiError::Load));
        assert!(!state.loading);
        // Previous items survive a failed reload
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.list_status(), ListStatus::Failed(UiError::Load));

        state.begin_load();
        state.finish_load(Ok(vec![]));
        assert_eq!(state.error, None);
        assert_eq!(state.list_status(), ListStatus::Empty);
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut state = loaded();
        state.open_form();
        state.set_name("   ".into());

        assert_eq!(state.prepare_submit(), None);
        assert_eq!(state.error, Some(UiError::Validation));
        assert!(!state.loading);
        assert!(state.show_form);
    }

    #[test]
    fn test_create_submission() {
        let mut state = loaded();
        state.open_form();
        assert_eq!(state.heading(), "Add New Item");
        assert_eq!(state.submit_label(), "Save");
        state.set_name("X".into());

        assert_eq!(
            state.prepare_submit(),
            Some(Submission::Create(ItemDraft::new("X", "")))
        );
        assert!(state.loading);
    }

    #[test]
    fn test_edit_submission() {
        let mut state = loaded();
        let item = state.items[1].clone();
        state.begin_edit(&item);
        assert_eq!(state.heading(), "Edit Item");
        assert_eq!(state.submit_label(), "Update");
        assert_eq!(state.draft, ItemDraft::from(&item));

        state.set_description("changed".into());
        assert_eq!(
            state.prepare_submit(),
            Some(Submission::Update(2, ItemDraft::new("Sample Item 2", "changed")))
        );
    }

    #[test]
    fn test_submit_ignored_while_loading() {
        let mut state = AppState::new();
        state.open_form();
        state.set_name("X".into());
        assert_eq!(state.prepare_submit(), None);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_finish_submit_resets_form() {
        let mut state = loaded();
        let item = state.items[0].clone();
        state.begin_edit(&item);
        state.prepare_submit();
        state.finish_submit();

        assert!(!state.show_form);
        assert_eq!(state.editing_id, None);
        assert_eq!(state.draft, ItemDraft::default());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_cancel_clears_error_and_draft() {
        let mut state = loaded();
        let item = state.items[0].clone();
        state.begin_edit(&item);
        state.set_name(String::new());
        state.prepare_submit();
        assert!(state.error.is_some());

        state.cancel();
        assert!(!state.show_form);
        assert_eq!(state.editing_id, None);
        assert_eq!(state.draft, ItemDraft::default());
        assert_eq!(state.error, None);
        assert_eq!(state.heading(), "Items List");
    }

    #[test]
    fn test_fail_keeps_form_open() {
        let mut state = loaded();
        state.open_form();
        state.set_name("X".into());
        state.prepare_submit();
        state.fail(UiError::Operation);

        assert!(state.show_form);
        assert!(!state.loading);
        assert_eq!(state.draft.name, "X");
        assert_eq!(state.list_status(), ListStatus::Failed(UiError::Operation));
    }

    #[test]
    fn test_begin_delete_when_busy() {
        let mut state = AppState::new();
        assert!(!state.begin_delete());

        let mut state = loaded();
        assert!(state.begin_delete());
        assert!(state.loading);
    }
}
