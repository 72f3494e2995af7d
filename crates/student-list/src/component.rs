//! The student list component: loader and delete handler.

use common::StudentId;
use student_api::StudentApi;
use tokio::sync::RwLock;

use crate::prompt::Prompt;
use crate::state::ListState;
use crate::view::{View, render};

/// Shown instead of the table when a load fails.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to fetch students";
/// Asked before every delete.
pub const CONFIRM_DELETE_MESSAGE: &str = "Yakin ingin menghapus siswa ini?";
/// Alerted when a delete request fails.
pub const DELETE_ERROR_MESSAGE: &str = "Gagal menghapus siswa.";

/// Which branch a [`StudentList::delete`] call took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No rendered row carries a delete control for this id: the list is
    /// loading, showing an error, or does not contain the record.
    NoSuchRow,
    /// The user declined; nothing was sent.
    Declined,
    /// A delete for this row is already in flight; its control is disabled.
    AlreadyDeleting,
    /// The backend deleted the record and the list was reloaded.
    Deleted,
    /// The backend request failed and the user was alerted.
    Failed,
}

/// Lists student records and deletes them on confirmation.
///
/// All methods take `&self`, so deletes of different rows can run
/// concurrently. The state lock is never held across a request.
pub struct StudentList<A, P> {
    api: A,
    prompt: P,
    state: RwLock<ListState>,
}

impl<A: StudentApi, P: Prompt> StudentList<A, P> {
    /// Creates the component in its loading state. Nothing is fetched until
    /// [`mount`](Self::mount).
    pub fn new(api: A, prompt: P) -> Self {
        Self {
            api,
            prompt,
            state: RwLock::new(ListState::new()),
        }
    }

    /// Activates the component: performs the initial load.
    pub async fn mount(&self) {
        self.load().await;
    }

    /// Fetches the full collection and replaces the current one.
    ///
    /// On failure the collection is left as is but hidden behind
    /// [`LOAD_ERROR_MESSAGE`]. There is no retry.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }
        metrics::counter!("student_list_loads_total").increment(1);

        let result = self.api.list_students().await;

        let mut state = self.state.write().await;
        match result {
            Ok(students) => {
                tracing::info!(count = students.len(), "students loaded");
                state.students = students;
            }
            Err(err) => {
                metrics::counter!("student_list_load_failures_total").increment(1);
                tracing::warn!(error = %err, "failed to fetch students");
                state.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        state.loading = false;
    }

    /// Deletes one record after asking the user to confirm.
    ///
    /// On success the whole list is reloaded; the row disappears only once
    /// the refetch confirms it. On failure the user is alerted and the list
    /// is left untouched. The row's in-flight marker is cleared either way.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: StudentId) -> DeleteOutcome {
        {
            let state = self.state.read().await;
            if !state.shows_row(id) {
                tracing::debug!(%id, "no delete control for student");
                return DeleteOutcome::NoSuchRow;
            }
            if state.is_deleting(id) {
                return DeleteOutcome::AlreadyDeleting;
            }
        }

        if !self.prompt.confirm(CONFIRM_DELETE_MESSAGE) {
            tracing::debug!(%id, "delete declined");
            return DeleteOutcome::Declined;
        }

        if !self.state.write().await.deleting.insert(id) {
            return DeleteOutcome::AlreadyDeleting;
        }
        metrics::counter!("student_list_deletes_total").increment(1);

        let outcome = match self.api.delete_student(id).await {
            Ok(()) => {
                tracing::info!(%id, "student deleted");
                self.load().await;
                DeleteOutcome::Deleted
            }
            Err(err) => {
                metrics::counter!("student_list_delete_failures_total").increment(1);
                tracing::warn!(%id, error = %err, "failed to delete student");
                self.prompt.alert(DELETE_ERROR_MESSAGE);
                DeleteOutcome::Failed
            }
        };

        self.state.write().await.deleting.remove(&id);
        outcome
    }

    /// Returns a copy of the current state.
    pub async fn state(&self) -> ListState {
        self.state.read().await.clone()
    }

    /// Renders the current state.
    pub async fn view(&self) -> View {
        render(&*self.state.read().await)
    }
}
