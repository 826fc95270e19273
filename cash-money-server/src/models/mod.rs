//! Domain models
//!
//! Input types are checked structurally by serde when a procedure call is
//! decoded. No semantic rules (length, duplicates) are applied.

pub mod note;

pub use note::{CreateNote, Note, RemoveNote};
