//! Note table definition
//!
//! The running server never executes this DDL. It is printed or applied by
//! the `schema` CLI command when provisioning a database.

use sqlx::PgPool;

/// Name of the single persisted table.
pub const TABLE_NAME: &str = "note";

/// DDL for the `note` table.
pub const CREATE_TABLE_SQL: &str = r#"CREATE TABLE IF NOT EXISTS note (
    id SERIAL PRIMARY KEY,
    note TEXT NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT now()
)"#;

/// Apply [`CREATE_TABLE_SQL`]. Safe to repeat.
pub async fn apply(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!(table = TABLE_NAME, "Applying schema");
    sqlx::query(CREATE_TABLE_SQL).execute(pool).await?;
    Ok(())
}
