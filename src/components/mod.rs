//! UI Components
//!
//! Leptos views for the todo page.

mod page_layout;
mod tab_bar;
mod todo_entry;
mod todo_panel;

pub use page_layout::PageLayout;
pub use tab_bar::{TabBar, TodoTab};
pub use todo_entry::TodoEntry;
pub use todo_panel::TodoPanel;
