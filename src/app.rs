//! Todo Sync Frontend App
//!
//! Todos page: tab bar over the incomplete and full lists.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::HttpBackend;
use crate::components::{PageLayout, TabBar, TodoPanel, TodoTab};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::controller::ListController;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    provide_context(store);

    let base_url = config.resolve_base_url().unwrap_or_else(|err| {
        log::error!("{}; requests will fail", err);
        String::new()
    });
    let ctx = AppContext::new(ListController::new(HttpBackend::new(base_url), store));
    provide_context(ctx);

    // Initial load
    Effect::new(move |_| ctx.refresh());

    // Derived views, recomputed on every list replacement
    let all_ids = Memo::new(move |_| store.todos().with(|list| list.ids()));
    let incomplete_ids = Memo::new(move |_| store.todos().with(|list| list.incomplete_ids()));

    let active_tab = Signal::derive(move || store.active_tab().get());
    let select_tab = Callback::new(move |tab: TodoTab| *store.active_tab().write() = tab);

    view! {
        <PageLayout title="Todos">
            <TabBar active=active_tab on_select=select_tab />

            <Show when=move || { store.pending_writes().get() > 0 }>
                <p class="saving-indicator">"Saving…"</p>
            </Show>

            {move || match active_tab.get() {
                TodoTab::Incomplete => view! {
                    <TodoPanel ids=incomplete_ids empty_text="Nothing left to do" />
                }.into_any(),
                TodoTab::All => view! {
                    <TodoPanel ids=all_ids empty_text="No todos yet" />
                }.into_any(),
            }}

            <p class="item-count">
                {move || store.todos().with(|list| {
                    format!("{} todos, {} incomplete", list.len(), list.incomplete_ids().len())
                })}
            </p>
        </PageLayout>
    }
}
