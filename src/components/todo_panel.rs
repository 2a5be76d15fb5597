//! Todo Panel Component
//!
//! Renders a list of todo rows for one tab.

use leptos::prelude::*;

use crate::components::TodoEntry;
use crate::context::AppContext;
use crate::models::TodoId;
use crate::store::{use_app_store, AppStateStoreFields};

/// Rows for the given ids, looked up in the store
#[component]
pub fn TodoPanel(
    #[prop(into)] ids: Signal<Vec<TodoId>>,
    empty_text: &'static str,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <div class="todo-panel">
            <Show
                when=move || ids.with(|ids| !ids.is_empty())
                fallback=move || view! { <p class="empty-panel">{empty_text}</p> }
            >
                <For
                    each=move || ids.get()
                    key=|id| id.clone()
                    children=move |id: TodoId| {
                        let lookup_id = id.clone();
                        let record = Signal::derive(move || {
                            store.todos().with(|list| list.get(&lookup_id).cloned())
                        });

                        let rename_id = id.clone();
                        let on_save = Callback::new(move |name: String| {
                            ctx.rename(rename_id.clone(), name)
                        });
                        let on_toggle_complete = Callback::new(move |_completed: bool| {
                            ctx.toggle_complete(id.clone())
                        });

                        view! {
                            <TodoEntry
                                record=record
                                on_save=on_save
                                on_toggle_complete=on_toggle_complete
                            />
                        }
                    }
                />
            </Show>
        </div>
    }
}
