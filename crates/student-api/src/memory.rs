//! In-memory student API for testing.

use std::sync::Arc;

use async_trait::async_trait;
use common::{StudentId, StudentRecord};
use reqwest::StatusCode;
use tokio::sync::RwLock;

use crate::api::StudentApi;
use crate::error::{ApiError, Result};

/// A request received by [`InMemoryStudentApi`], in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCall {
    List,
    Delete(StudentId),
}

#[derive(Debug, Default)]
struct InMemoryApiState {
    students: Vec<StudentRecord>,
    calls: Vec<ApiCall>,
    fail_on_list: bool,
    fail_on_delete: bool,
}

/// In-memory student backend.
///
/// Keeps records in insertion order, logs every call and can be told to
/// fail list or delete requests. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentApi {
    state: Arc<RwLock<InMemoryApiState>>,
}

impl InMemoryStudentApi {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-populated with `students`.
    pub fn with_students(students: impl IntoIterator<Item = StudentRecord>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryApiState {
                students: students.into_iter().collect(),
                ..Default::default()
            })),
        }
    }

    /// Appends a record.
    pub async fn insert(&self, student: StudentRecord) {
        self.state.write().await.students.push(student);
    }

    /// Configures list requests to fail.
    pub async fn set_fail_on_list(&self, fail: bool) {
        self.state.write().await.fail_on_list = fail;
    }

    /// Configures delete requests to fail.
    pub async fn set_fail_on_delete(&self, fail: bool) {
        self.state.write().await.fail_on_delete = fail;
    }

    /// Returns the stored records.
    pub async fn students(&self) -> Vec<StudentRecord> {
        self.state.read().await.students.clone()
    }

    /// Returns every call received so far.
    pub async fn calls(&self) -> Vec<ApiCall> {
        self.state.read().await.calls.clone()
    }

    /// Returns the number of list requests received.
    pub async fn list_count(&self) -> usize {
        self.state
            .read()
            .await
            .calls
            .iter()
            .filter(|call| matches!(call, ApiCall::List))
            .count()
    }
}

#[async_trait]
impl StudentApi for InMemoryStudentApi {
    async fn list_students(&self) -> Result<Vec<StudentRecord>> {
        let mut state = self.state.write().await;
        state.calls.push(ApiCall::List);

        if state.fail_on_list {
            return Err(ApiError::Unavailable("list failed".to_string()));
        }

        Ok(state.students.clone())
    }

    async fn delete_student(&self, id: StudentId) -> Result<()> {
        let mut state = self.state.write().await;
        state.calls.push(ApiCall::Delete(id));

        if state.fail_on_delete {
            return Err(ApiError::Unavailable("delete failed".to_string()));
        }

        let before = state.students.len();
        state.students.retain(|s| s.id != id);
        if state.students.len() == before {
            return Err(ApiError::HttpStatus(StatusCode::NOT_FOUND));
        }

        Ok(())
    }
}
