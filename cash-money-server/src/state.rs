//! Application state shared across handlers

use std::sync::Arc;

use crate::db::NoteStore;

/// Shared application state
///
/// Built once at startup and cloned into every handler. The store is the
/// only shared resource; handlers borrow it and never replace it.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    notes: Arc<dyn NoteStore>,
}

impl AppState {
    pub fn new(notes: impl NoteStore + 'static) -> Self {
        Self::from_shared(Arc::new(notes))
    }

    /// Use a store the caller keeps a handle to.
    pub fn from_shared(notes: Arc<dyn NoteStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { notes }),
        }
    }

    pub fn notes(&self) -> &dyn NoteStore {
        self.inner.notes.as_ref()
    }
}
