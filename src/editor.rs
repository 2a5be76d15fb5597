//! Entry Editor State
//!
//! Edit buffer and Clean/Dirty state machine for one todo row.
//! No I/O here; the view turns the returned intents into callbacks.

/// Name edit state relative to the last received `name` prop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Clean,
    Dirty,
}

/// Per-row edit buffer.
///
/// `baseline` is the last `name` prop; `draft_name` is what the input shows.
/// `save_pending` is set by `save()` until the next refresh lands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryEditor {
    baseline: String,
    draft_name: String,
    is_completed: bool,
    state: EditState,
    save_pending: bool,
}

impl EntryEditor {
    pub fn new(name: &str, completed: bool) -> Self {
        Self {
            baseline: name.to_string(),
            draft_name: name.to_string(),
            is_completed: completed,
            state: EditState::Clean,
            save_pending: false,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn draft_name(&self) -> &str {
        &self.draft_name
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn is_save_enabled(&self) -> bool {
        self.state == EditState::Dirty
    }

    /// User typed into the name field
    pub fn edit_name(&mut self, draft: impl Into<String>) {
        self.draft_name = draft.into();
        self.save_pending = false;
        self.state = if self.draft_name == self.baseline {
            EditState::Clean
        } else {
            EditState::Dirty
        };
    }

    /// Props delivered by a list refresh.
    ///
    /// A changed `name` always wins over the draft, and so does the first
    /// refresh after a save, so a rejected rename snaps back. `completed`
    /// always overwrites the local flag, undoing a toggle the backend rejected.
    pub fn receive_props(&mut self, name: &str, completed: bool) {
        if name != self.baseline || self.save_pending {
            self.baseline = name.to_string();
            self.draft_name = name.to_string();
            self.state = EditState::Clean;
        } else if name == self.draft_name {
            self.state = EditState::Clean;
        }
        self.save_pending = false;
        self.is_completed = completed;
    }

    /// Name to send upward, only when Dirty.
    ///
    /// The draft stays on screen until the next refresh replaces it.
    pub fn save(&mut self) -> Option<String> {
        match self.state {
            EditState::Dirty => {
                self.save_pending = true;
                Some(self.draft_name.clone())
            }
            EditState::Clean => None,
        }
    }

    /// Optimistically flip the completion flag; returns the new local value
    pub fn toggle(&mut self) -> bool {
        self.is_completed = !self.is_completed;
        self.is_completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_clean() {
        let mut editor = EntryEditor::new("A", false);
        assert_eq!(editor.state(), EditState::Clean);
        assert_eq!(editor.draft_name(), "A");
        assert!(!editor.is_save_enabled());
        assert_eq!(editor.save(), None);
    }

    #[test]
    fn test_edit_enables_save_and_prop_catch_up_cleans() {
        let mut editor = EntryEditor::new("A", false);
        editor.edit_name("B");
        assert_eq!(editor.state(), EditState::Dirty);
        assert_eq!(editor.save(), Some("B".to_string()));

        editor.receive_props("B", false);
        assert_eq!(editor.state(), EditState::Clean);
        assert!(!editor.is_save_enabled());
        assert_eq!(editor.draft_name(), "B");
    }

    #[test]
    fn test_editing_back_to_prop_is_clean() {
        let mut editor = EntryEditor::new("A", false);
        editor.edit_name("AB");
        editor.edit_name("A");
        assert_eq!(editor.state(), EditState::Clean);
    }

    #[test]
    fn test_refresh_discards_unsaved_draft() {
        let mut editor = EntryEditor::new("A", false);
        editor.edit_name("mine");
        editor.receive_props("theirs", false);

        assert_eq!(editor.state(), EditState::Clean);
        assert_eq!(editor.draft_name(), "theirs");
        assert_eq!(editor.save(), None);
    }

    #[test]
    fn test_unchanged_name_keeps_draft() {
        let mut editor = EntryEditor::new("A", false);
        editor.edit_name("B");
        editor.receive_props("A", true);

        assert_eq!(editor.state(), EditState::Dirty);
        assert_eq!(editor.draft_name(), "B");
        assert!(editor.is_completed());
    }

    #[test]
    fn test_save_does_not_change_display() {
        let mut editor = EntryEditor::new("A", false);
        editor.edit_name("B");
        let _ = editor.save();
        assert_eq!(editor.draft_name(), "B");
        assert_eq!(editor.state(), EditState::Dirty);
    }

    #[test]
    fn test_rejected_rename_reverts_on_refresh() {
        let mut editor = EntryEditor::new("A", false);
        editor.edit_name("B");
        assert_eq!(editor.save(), Some("B".to_string()));

        // backend refused; reconciling fetch still says "A"
        editor.receive_props("A", false);
        assert_eq!(editor.draft_name(), "A");
        assert_eq!(editor.state(), EditState::Clean);
        assert!(!editor.is_save_enabled());
    }

    #[test]
    fn test_accepted_rename_settles_clean() {
        let mut editor = EntryEditor::new("A", false);
        editor.edit_name("B");
        editor.save();
        editor.receive_props("B", false);

        assert_eq!(editor.draft_name(), "B");
        assert_eq!(editor.state(), EditState::Clean);
        // a later refresh with the same name keeps things as they are
        editor.edit_name("C");
        editor.receive_props("B", false);
        assert_eq!(editor.draft_name(), "C");
    }

    #[test]
    fn test_edit_after_save_keeps_new_draft_on_same_name_refresh() {
        let mut editor = EntryEditor::new("A", false);
        editor.edit_name("B");
        editor.save();
        editor.edit_name("C");
        editor.receive_props("A", false);

        assert_eq!(editor.draft_name(), "C");
        assert_eq!(editor.state(), EditState::Dirty);
    }

    #[test]
    fn test_toggle_is_optimistic_and_refresh_corrects_it() {
        let mut editor = EntryEditor::new("A", false);
        assert!(editor.toggle());
        assert!(editor.is_completed());

        // write failed; reconciling fetch still reports false
        editor.receive_props("A", false);
        assert!(!editor.is_completed());
    }

    #[test]
    fn test_toggle_independent_of_name_state() {
        let mut editor = EntryEditor::new("A", false);
        editor.edit_name("B");
        editor.toggle();
        assert_eq!(editor.state(), EditState::Dirty);
        assert_eq!(editor.save(), Some("B".to_string()));
    }
}
