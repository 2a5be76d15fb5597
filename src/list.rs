//! Canonical Todo List
//!
//! Server-reflected list plus its derived views.

use crate::models::{TodoId, TodoRecord};

/// The list as of the most recent successful fetch.
///
/// Records are kept newest-first. Only `replace` mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    records: Vec<TodoRecord>,
}

impl TodoList {
    /// Swap in a fresh fetch result, sorted by `created` descending.
    ///
    /// Equal timestamps keep backend order.
    pub fn replace(&mut self, mut records: Vec<TodoRecord>) {
        records.sort_by(|a, b| b.created.cmp(&a.created));
        self.records = records;
    }

    #[cfg(test)]
    pub fn records(&self) -> &[TodoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &TodoId) -> Option<&TodoRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Records with `completed == false`, in list order
    #[cfg(test)]
    pub fn incomplete(&self) -> Vec<TodoRecord> {
        self.records.iter().filter(|r| !r.completed).cloned().collect()
    }

    pub fn ids(&self) -> Vec<TodoId> {
        self.records.iter().map(|r| r.id.clone()).collect()
    }

    pub fn incomplete_ids(&self) -> Vec<TodoId> {
        self.records
            .iter()
            .filter(|r| !r.completed)
            .map(|r| r.id.clone())
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    pub(crate) fn make_record(id: &str, name: &str, completed: bool, created_secs: i64) -> TodoRecord {
        TodoRecord {
            id: TodoId::from(id),
            name: name.to_string(),
            completed,
            created: DateTime::<Utc>::from_timestamp(created_secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_replace_sorts_newest_first() {
        let mut list = TodoList::default();
        list.replace(vec![
            make_record("1", "old", false, 100),
            make_record("2", "newest", false, 300),
            make_record("3", "middle", true, 200),
        ]);

        let ids: Vec<&str> = list.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_equal_timestamps_keep_backend_order() {
        let mut list = TodoList::default();
        list.replace(vec![
            make_record("b", "B", false, 50),
            make_record("a", "A", false, 50),
        ]);
        assert_eq!(list.ids(), vec![TodoId::from("b"), TodoId::from("a")]);
    }

    #[test]
    fn test_replace_discards_previous_records() {
        let mut list = TodoList::default();
        list.replace(vec![make_record("1", "x", false, 1), make_record("2", "y", false, 2)]);
        list.replace(vec![make_record("3", "z", false, 3)]);

        assert_eq!(list.len(), 1);
        assert!(!list.contains(&TodoId::from("1")));
        assert_eq!(list.get(&TodoId::from("3")).map(|r| r.name.as_str()), Some("z"));
    }

    #[test]
    fn test_incomplete_is_exact_subset() {
        let mut list = TodoList::default();
        list.replace(vec![
            make_record("1", "a", true, 1),
            make_record("2", "b", false, 2),
            make_record("3", "c", false, 3),
            make_record("4", "d", true, 4),
        ]);

        let incomplete = list.incomplete();
        assert_eq!(incomplete.len(), 2);
        assert!(incomplete.iter().all(|r| !r.completed));
        assert!(incomplete.iter().all(|r| list.get(&r.id) == Some(r)));
        assert_eq!(list.incomplete_ids(), vec![TodoId::from("3"), TodoId::from("2")]);

        let expected: Vec<&TodoRecord> = list.records().iter().filter(|r| !r.completed).collect();
        assert_eq!(incomplete.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_empty_list() {
        let list = TodoList::default();
        assert!(list.is_empty());
        assert!(list.incomplete().is_empty());
    }
}
