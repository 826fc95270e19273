//! Health check endpoint

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::rpc::{notes, RPC_PREFIX};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub rpc_prefix: String,
    pub procedures: Vec<String>,
}

/// GET /health - process liveness only, the database is not probed
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        rpc_prefix: RPC_PREFIX.into(),
        procedures: notes::PROCEDURES.iter().map(|p| p.to_string()).collect(),
    })
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_lists_procedures() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.rpc_prefix, "/api/trpc");
        assert_eq!(body.procedures, ["notes.create", "notes.list", "notes.remove"]);
    }
}
