//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::env::DatabaseUrl;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the first connection fails.
///
/// # Example
///
/// ```ignore
/// let url = EnvResolver::default().resolve()?;
/// let pool = create_pool(&url).await?;
/// ```
pub async fn create_pool(database_url: &DatabaseUrl) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with a custom connection limit.
pub async fn create_pool_with_options(
    database_url: &DatabaseUrl,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(url = %database_url, max_connections, "Opening connection pool");
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url.expose())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p cash-money-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = DatabaseUrl::new(std::env::var("DATABASE_URL").expect("DATABASE_URL required"));
        let pool = create_pool(&url).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
