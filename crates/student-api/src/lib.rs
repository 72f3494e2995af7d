//! Client side of the student records HTTP API.
//!
//! - [`StudentApi`] is the seam the UI layer depends on
//! - [`HttpStudentApi`] talks to a real backend with `reqwest`
//! - [`InMemoryStudentApi`] is a scriptable backend for tests

pub mod api;
pub mod error;
pub mod http;
pub mod memory;

pub use api::StudentApi;
pub use common::{StudentId, StudentRecord};
pub use error::{ApiError, Result};
pub use http::HttpStudentApi;
pub use memory::{ApiCall, InMemoryStudentApi};
