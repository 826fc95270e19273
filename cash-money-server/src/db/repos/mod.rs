//! Note stores
//!
//! [`NoteStore`] is the seam between the procedures and storage:
//! - [`PgNoteStore`] runs plain passthrough SQL against Postgres
//! - [`MemoryNoteStore`] keeps rows in process, for tests and embedding

pub mod memory;
pub mod notes;

use async_trait::async_trait;

use crate::models::{CreateNote, Note};

pub use memory::MemoryNoteStore;
pub use notes::PgNoteStore;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Storage for notes. Implementations must be safe to share across
/// concurrent procedure calls.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Insert one note and return the stored row.
    async fn create(&self, input: CreateNote) -> Result<Note, DbError>;

    /// All notes, in storage order. No filtering or pagination.
    async fn list(&self) -> Result<Vec<Note>, DbError>;

    /// Delete the note with `id`. A missing id is not an error.
    async fn remove(&self, id: i32) -> Result<(), DbError>;
}
