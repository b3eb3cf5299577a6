//! Domain records displayed by the dashboard.
//!
//! Everything here is read-only display data sourced from `crate::fixtures`.
//! Create and edit flows produce drafts (`ProjectDraft`, `FormDraft`) that are
//! handed to a save collaborator; no store is ever mutated.

pub mod forms;
pub mod inventory;
pub mod project;
pub mod safety;
pub mod user;

pub use forms::*;
pub use inventory::*;
pub use project::*;
pub use safety::*;
pub use user::*;
