//! Backend Command Wrappers
//!
//! Frontend bindings to the todo backend.

mod http;
mod todo;

use async_trait::async_trait;

use crate::error::TodoResult;
use crate::models::{TodoId, TodoRecord};

pub use http::HttpBackend;
pub use todo::*;

/// Todo backend operations.
///
/// Futures are not `Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait TodoBackend {
    /// Full todo collection, in backend order
    async fn fetch_all(&self) -> TodoResult<Vec<TodoRecord>>;

    /// Rename a todo; the response body is ignored
    async fn update_name(&self, id: &TodoId, name: &str) -> TodoResult<()>;

    /// Ask the backend to flip `completed`; the response body is ignored
    async fn toggle_completed(&self, id: &TodoId) -> TodoResult<()>;
}
