//! The student records API seam.

use async_trait::async_trait;
use common::{StudentId, StudentRecord};

use crate::error::Result;

/// Operations the student list needs from the backend.
///
/// Any `Err` is treated as a failed request by callers; the variant only
/// matters for logging.
#[async_trait]
pub trait StudentApi: Send + Sync {
    /// `GET /students`: the full collection, in response order.
    async fn list_students(&self) -> Result<Vec<StudentRecord>>;

    /// `DELETE /students/{id}`.
    async fn delete_student(&self, id: StudentId) -> Result<()>;
}

#[async_trait]
impl<T: StudentApi + ?Sized> StudentApi for std::sync::Arc<T> {
    async fn list_students(&self) -> Result<Vec<StudentRecord>> {
        (**self).list_students().await
    }

    async fn delete_student(&self, id: StudentId) -> Result<()> {
        (**self).delete_student(id).await
    }
}
