//! Command implementations for the cash-money CLI

pub mod schema;
pub mod serve;

use std::path::PathBuf;

use clap::Args;

use cash_money_server::EnvResolver;

pub use schema::run_schema;
pub use serve::run_serve;

/// Where to look for the `.env` file
#[derive(Args, Debug, Clone)]
pub struct EnvArgs {
    /// Path to the .env file (default: workspace root)
    #[arg(long, env = "CASH_MONEY_ENV_FILE")]
    pub env_file: Option<PathBuf>,
}

impl EnvArgs {
    pub fn resolver(&self) -> EnvResolver {
        match &self.env_file {
            Some(path) => EnvResolver::new(path),
            None => EnvResolver::default(),
        }
    }
}
