//! In-process note store
//!
//! Mirrors the Postgres behaviour that callers can observe: ids start at 1
//! and are never reused, `created_at` is stamped on insert, rows come back
//! in insertion order.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use super::{DbError, NoteStore};
use crate::models::{CreateNote, Note};

#[derive(Debug)]
struct Inner {
    next_id: i32,
    rows: Vec<Note>,
}

/// Note store held entirely in memory
#[derive(Debug)]
pub struct MemoryNoteStore {
    inner: Mutex<Inner>,
}

impl Default for MemoryNoteStore {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                rows: Vec::new(),
            }),
        }
    }
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Every mutation is a single push or retain, so a poisoned guard
        // still holds consistent rows.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn create(&self, input: CreateNote) -> Result<Note, DbError> {
        let mut inner = self.lock();
        let note = Note {
            id: inner.next_id,
            note: input.note,
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.rows.push(note.clone());
        Ok(note)
    }

    async fn list(&self) -> Result<Vec<Note>, DbError> {
        Ok(self.lock().rows.clone())
    }

    async fn remove(&self, id: i32) -> Result<(), DbError> {
        self.lock().rows.retain(|n| n.id != id);
        Ok(())
    }
}
