//! Database layer - connection pool, schema, and note stores
//!
//! - One pool per process, built at startup and injected into handlers
//! - No runtime migrations; the DDL is applied out of band
//! - Storage errors are passed through untouched

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::{DbError, MemoryNoteStore, NoteStore, PgNoteStore};
