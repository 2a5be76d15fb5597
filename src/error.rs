//! Error Types
//!
//! Failure taxonomy for backend calls and list mutations.

use thiserror::Error;

use crate::models::TodoId;

/// Common result type for todo operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Todo client errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TodoError {
    /// Request never produced a response (network unreachable, CORS, bad URL)
    #[error("transport error: {0}")]
    Transport(String),
    /// Backend answered with a non-2xx status
    #[error("{path} returned status {status}")]
    Status { path: String, status: u16 },
    /// Response body could not be decoded
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// Mutation targeted a record that is not in the current list
    #[error("todo {0} is not in the current list")]
    UnknownTodo(TodoId),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl TodoError {
    /// Whether this error came from the backend round-trip
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            TodoError::Transport(_) | TodoError::Status { .. } | TodoError::Decode(_)
        )
    }
}

impl From<reqwest::Error> for TodoError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => TodoError::Status {
                path: err.url().map(|u| u.path().to_string()).unwrap_or_default(),
                status: status.as_u16(),
            },
            None => TodoError::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for TodoError {
    fn from(err: serde_json::Error) -> Self {
        TodoError::Decode(err.to_string())
    }
}
