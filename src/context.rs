//! Application Context
//!
//! Shared controller handle provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::HttpBackend;
use crate::controller::ListController;
use crate::models::TodoId;
use crate::store::AppStore;

pub type AppController = ListController<HttpBackend, AppStore>;

/// App-wide handle for dispatching list operations
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<AppController, LocalStorage>,
}

impl AppContext {
    pub fn new(controller: AppController) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
        }
    }

    /// Re-fetch the whole list
    pub fn refresh(&self) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            let _ = controller.fetch_all().await;
        });
    }

    /// Send a rename; the list updates once the follow-up fetch lands
    pub fn rename(&self, id: TodoId, name: String) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.request_rename(&id, &name).await;
        });
    }

    /// Send a completion flip; the list updates once the follow-up fetch lands
    pub fn toggle_complete(&self, id: TodoId) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.request_toggle_complete(&id).await;
        });
    }
}
