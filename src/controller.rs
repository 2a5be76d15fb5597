//! List Controller
//!
//! Owns fetching, write dispatch and reconciliation for the todo list.
//! Every write is followed by a full re-fetch; the list is never patched locally.

use std::rc::Rc;

use crate::commands::TodoBackend;
use crate::error::{TodoError, TodoResult};
use crate::list::TodoList;
use crate::models::{TodoId, TodoRecord};

/// Where the controller keeps the canonical list
pub trait ListHandle {
    fn with_list<R>(&self, f: impl FnOnce(&TodoList) -> R) -> R;

    /// Replace the whole list with a fetch result
    fn replace_records(&self, records: Vec<TodoRecord>);

    /// A write was dispatched
    fn write_started(&self) {}

    /// A write and its reconciling fetch have both settled
    fn write_finished(&self) {}
}

/// Receives failures the controller swallows
pub trait FailureReporter {
    fn report(&self, operation: &str, error: &TodoError);
}

/// Reports through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl FailureReporter for LogReporter {
    fn report(&self, operation: &str, error: &TodoError) {
        if error.is_transport() {
            log::error!("{} failed: {}", operation, error);
        } else {
            log::warn!("{} skipped: {}", operation, error);
        }
    }
}

pub struct ListController<B, H> {
    backend: Rc<B>,
    list: H,
    reporter: Rc<dyn FailureReporter>,
}

impl<B, H: Clone> Clone for ListController<B, H> {
    fn clone(&self) -> Self {
        Self {
            backend: Rc::clone(&self.backend),
            list: self.list.clone(),
            reporter: Rc::clone(&self.reporter),
        }
    }
}

impl<B: TodoBackend, H: ListHandle> ListController<B, H> {
    pub fn new(backend: B, list: H) -> Self {
        Self {
            backend: Rc::new(backend),
            list,
            reporter: Rc::new(LogReporter),
        }
    }

    #[cfg(test)]
    pub fn with_reporter(mut self, reporter: impl FailureReporter + 'static) -> Self {
        self.reporter = Rc::new(reporter);
        self
    }

    /// Fetch everything and replace the list.
    ///
    /// On failure the previous list stays and the error is reported.
    /// Returns the number of records received.
    pub async fn fetch_all(&self) -> TodoResult<usize> {
        match self.backend.fetch_all().await {
            Ok(records) => {
                let count = records.len();
                self.list.replace_records(records);
                log::debug!("fetched {} todos", count);
                Ok(count)
            }
            Err(err) => {
                self.reporter.report("fetch todos", &err);
                Err(err)
            }
        }
    }

    /// Rename, then reconcile whatever the write outcome
    pub async fn request_rename(&self, id: &TodoId, new_name: &str) {
        if !self.ensure_present(id, "rename todo") {
            return;
        }
        self.list.write_started();
        log::debug!("renaming todo {}", id);
        if let Err(err) = self.backend.update_name(id, new_name).await {
            self.reporter.report("rename todo", &err);
        }
        let _ = self.fetch_all().await;
        self.list.write_finished();
    }

    /// Ask the backend to flip `completed`, then reconcile whatever the write outcome
    pub async fn request_toggle_complete(&self, id: &TodoId) {
        if !self.ensure_present(id, "toggle todo") {
            return;
        }
        self.list.write_started();
        log::debug!("toggling todo {}", id);
        if let Err(err) = self.backend.toggle_completed(id).await {
            self.reporter.report("toggle todo", &err);
        }
        let _ = self.fetch_all().await;
        self.list.write_finished();
    }

    fn ensure_present(&self, id: &TodoId, operation: &str) -> bool {
        if self.list.with_list(|list| list.contains(id)) {
            return true;
        }
        self.reporter.report(operation, &TodoError::UnknownTodo(id.clone()));
        false
    }
}
