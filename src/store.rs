//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::TodoTab;
use crate::controller::ListHandle;
use crate::list::TodoList;
use crate::models::TodoRecord;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Canonical list from the latest fetch
    pub todos: TodoList,
    /// Which panel is shown
    pub active_tab: TodoTab,
    /// Writes whose reconciling fetch has not settled yet
    pub pending_writes: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

impl ListHandle for AppStore {
    fn with_list<R>(&self, f: impl FnOnce(&TodoList) -> R) -> R {
        self.todos().with_untracked(f)
    }

    fn replace_records(&self, records: Vec<TodoRecord>) {
        // single write: both views see the new list together
        TodoList::replace(&mut self.todos().write(), records);
    }

    fn write_started(&self) {
        *self.pending_writes().write() += 1;
    }

    fn write_finished(&self) {
        self.pending_writes().update(|n| *n = n.saturating_sub(1));
    }
}
