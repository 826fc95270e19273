//! Schema command - print or apply the `note` table DDL
//!
//! The server itself never creates tables; this is the provisioning step.

use anyhow::{Context, Result};
use clap::Parser;

use cash_money_server::db::{create_pool, schema};

use super::EnvArgs;

/// Arguments for the schema command
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Execute the DDL against DATABASE_URL instead of printing it
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub env: EnvArgs,
}

pub async fn run_schema(args: SchemaArgs) -> Result<()> {
    if !args.apply {
        println!("{};", schema::CREATE_TABLE_SQL);
        return Ok(());
    }

    let database_url = args
        .env
        .resolver()
        .resolve()
        .context("Cannot apply schema without a database connection string")?;

    let pool = create_pool(&database_url)
        .await
        .with_context(|| format!("Failed to connect to {}", database_url))?;

    schema::apply(&pool)
        .await
        .with_context(|| format!("Failed to create table '{}'", schema::TABLE_NAME))?;

    println!("Table '{}' is ready", schema::TABLE_NAME);
    Ok(())
}
