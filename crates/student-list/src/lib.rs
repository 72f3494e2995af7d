//! Student list component.
//!
//! A headless rendition of a CRUD list view:
//! - [`StudentList`] fetches the collection on mount and deletes records
//!   after a [`Prompt`] confirmation, reloading on success
//! - [`render`] maps the component's [`ListState`] to a [`View`]
//!
//! ```text
//! mount ──► load ──► render ──► delete(id) ──► confirm ──┬──► DELETE ──┬──► load
//!                                                        └──► (no-op)  └──► alert
//! ```

pub mod component;
pub mod prompt;
pub mod state;
pub mod view;

pub use component::{
    CONFIRM_DELETE_MESSAGE, DELETE_ERROR_MESSAGE, DeleteOutcome, LOAD_ERROR_MESSAGE, StudentList,
};
pub use prompt::{Prompt, ScriptedPrompt};
pub use state::ListState;
pub use view::{DeleteControl, PLACEHOLDER, StudentRow, StudentTable, View, render};
