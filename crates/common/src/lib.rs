//! Shared types for the student roster.

pub mod types;

pub use types::{StudentId, StudentRecord};
