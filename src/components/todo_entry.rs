//! Todo Entry Component
//!
//! One editable todo row: name input, completion checkbox, save button.

use leptos::prelude::*;

use crate::editor::EntryEditor;
use crate::models::TodoRecord;

/// Editable row for a single todo.
///
/// Never talks to the backend. Intent goes up through the callbacks and the
/// refreshed record comes back down through `record`.
///
/// # Arguments
/// * `record` - Current server copy; `None` once the record left the list
/// * `on_save` - Called with the draft name when Save is pressed in Dirty state
/// * `on_toggle_complete` - Called with the new local flag after a checkbox flip
#[component]
pub fn TodoEntry(
    #[prop(into)] record: Signal<Option<TodoRecord>>,
    #[prop(into)] on_save: Callback<String>,
    #[prop(into)] on_toggle_complete: Callback<bool>,
) -> impl IntoView {
    let seed = record
        .get_untracked()
        .map(|r| EntryEditor::new(&r.name, r.completed))
        .unwrap_or_default();
    let editor = RwSignal::new(seed);

    // Every list refresh re-delivers props
    Effect::new(move |_| {
        if let Some(current) = record.get() {
            editor.update(|e| e.receive_props(&current.name, current.completed));
        }
    });

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        editor.update(|e| e.edit_name(value));
    };

    let on_toggle = move |_: web_sys::Event| {
        let mut completed = false;
        editor.update(|e| completed = e.toggle());
        on_toggle_complete.run(completed);
    };

    let on_save_click = move |_: web_sys::MouseEvent| {
        let mut draft = None;
        editor.update(|e| draft = e.save());
        if let Some(name) = draft {
            on_save.run(name);
        }
    };

    view! {
        <div class=move || if editor.with(|e| e.is_completed()) { "todo-entry completed" } else { "todo-entry" }>
            <input
                type="text"
                class="todo-name"
                prop:value=move || editor.with(|e| e.draft_name().to_string())
                on:input=on_input
            />
            <input
                type="checkbox"
                prop:checked=move || editor.with(|e| e.is_completed())
                on:change=on_toggle
            />
            <button
                class="save-btn"
                disabled=move || !editor.with(|e| e.is_save_enabled())
                on:click=on_save_click
            >
                "Save"
            </button>
        </div>
    }
}
