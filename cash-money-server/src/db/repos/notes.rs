//! Postgres note store
//!
//! Direct passthrough CRUD against the `note` table. No transactions, no
//! retries: every statement is a single round trip.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, NoteStore};
use crate::models::note::NoteRow;
use crate::models::{CreateNote, Note};

/// Note store backed by a shared connection pool
#[derive(Debug, Clone)]
pub struct PgNoteStore {
    pool: PgPool,
}

impl PgNoteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn create(&self, input: CreateNote) -> Result<Note, DbError> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            INSERT INTO note (note) VALUES ($1)
            RETURNING id, note, created_at
            "#,
        )
        .bind(&input.note)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Note>, DbError> {
        let rows = sqlx::query_as::<_, NoteRow>("SELECT id, note, created_at FROM note")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn remove(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM note WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(id, rows = result.rows_affected(), "note delete executed");
        Ok(())
    }
}
