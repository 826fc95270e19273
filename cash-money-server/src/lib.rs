//! cash-money-server: the notes RPC service
//!
//! Startup flows one way:
//! [`env::EnvResolver`] resolves `DATABASE_URL`, [`db`] opens the pool and
//! wraps it in a [`db::NoteStore`], [`AppState`] carries that store into the
//! [`rpc`] procedures, and [`http`] serves them.

pub mod db;
pub mod env;
pub mod http;
pub mod models;
pub mod rpc;
pub mod state;

pub use db::{DbError, MemoryNoteStore, NoteStore, PgNoteStore};
pub use env::{ConfigError, DatabaseUrl, EnvResolver};
pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use models::{CreateNote, Note, RemoveNote};
pub use state::AppState;
