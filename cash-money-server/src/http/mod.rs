//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - The RPC router mounted under [`crate::rpc::RPC_PREFIX`]

pub mod routes;
pub mod server;

pub use server::{build_router, run_server, ServerConfig, ServerError};
