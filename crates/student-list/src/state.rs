//! Component state.

use std::collections::BTreeSet;

use common::{StudentId, StudentRecord};

/// Everything the renderer needs to draw the list.
///
/// `students` is only ever replaced wholesale by a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub students: Vec<StudentRecord>,
    pub loading: bool,
    pub error: Option<String>,
    /// Rows with a delete request in flight.
    pub deleting: BTreeSet<StudentId>,
}

impl ListState {
    /// State of a freshly created component: empty and loading.
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            loading: true,
            error: None,
            deleting: BTreeSet::new(),
        }
    }

    /// Returns true if a delete request for `id` is in flight.
    pub fn is_deleting(&self, id: StudentId) -> bool {
        self.deleting.contains(&id)
    }

    /// Returns true if the rendered table has a row (and so a delete
    /// control) for `id`.
    pub fn shows_row(&self, id: StudentId) -> bool {
        !self.loading && self.error.is_none() && self.students.iter().any(|s| s.id == id)
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_loading_and_empty() {
        let state = ListState::new();
        assert!(state.loading);
        assert!(state.error.is_none());
        assert!(state.students.is_empty());
        assert!(state.deleting.is_empty());
    }

    #[test]
    fn test_is_deleting_is_per_id() {
        let mut state = ListState::new();
        state.deleting.insert(StudentId::new(4));

        assert!(state.is_deleting(StudentId::new(4)));
        assert!(!state.is_deleting(StudentId::new(5)));
    }

    #[test]
    fn test_shows_row_only_for_rendered_records() {
        let mut state = ListState::new();
        state.students = vec![StudentRecord::new(1, "S01", "Ana")];
        assert!(!state.shows_row(StudentId::new(1)));

        state.loading = false;
        assert!(state.shows_row(StudentId::new(1)));
        assert!(!state.shows_row(StudentId::new(2)));

        state.error = Some("Failed to fetch students".to_string());
        assert!(!state.shows_row(StudentId::new(1)));
    }
}
