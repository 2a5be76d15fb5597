//! Tab Bar Component
//!
//! Switches between the incomplete and full todo panels.

use leptos::prelude::*;

/// Todo panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoTab {
    #[default]
    Incomplete,
    All,
}

impl TodoTab {
    /// Display order
    pub const ALL: [TodoTab; 2] = [TodoTab::Incomplete, TodoTab::All];

    pub fn label(self) -> &'static str {
        match self {
            TodoTab::Incomplete => "Incomplete Todos",
            TodoTab::All => "All Todos",
        }
    }
}

/// Tab bar component
#[component]
pub fn TabBar(
    #[prop(into)] active: Signal<TodoTab>,
    #[prop(into)] on_select: Callback<TodoTab>,
) -> impl IntoView {
    view! {
        <div class="tab-bar">
            {TodoTab::ALL.into_iter().map(|tab| {
                let tab_class = move || {
                    if active.get() == tab { "tab active" } else { "tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| on_select.run(tab)>
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_tab_first_and_default() {
        assert_eq!(TodoTab::default(), TodoTab::Incomplete);
        assert_eq!(TodoTab::ALL[0], TodoTab::Incomplete);
        assert_eq!(TodoTab::ALL[1].label(), "All Todos");
    }
}
