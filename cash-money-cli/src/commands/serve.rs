//! HTTP server command
//!
//! Resolves the connection string, opens the pool, and serves the notes
//! procedures until shutdown.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use cash_money_server::db::{create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
use cash_money_server::{run_server, AppState, PgNoteStore, ServerConfig};

use super::EnvArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "CASH_MONEY_BIND", default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Maximum connections in the database pool
    #[arg(long, env = "CASH_MONEY_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    #[command(flatten)]
    pub env: EnvArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    // Fatal before anything is bound: no procedure is callable without a URL.
    let database_url = args
        .env
        .resolver()
        .resolve()
        .context("Cannot start without a database connection string")?;

    let pool = create_pool_with_options(&database_url, args.max_connections)
        .await
        .with_context(|| format!("Failed to connect to {}", database_url))?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    tracing::info!("Starting cash-money server on {}", config.bind_addr);

    run_server(AppState::new(PgNoteStore::new(pool)), config)
        .await
        .context("Server error")?;

    Ok(())
}
