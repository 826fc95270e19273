//! RPC surface - the `notes` procedures over HTTP
//!
//! Speaks the tRPC HTTP shape so existing tRPC clients can call it:
//! - queries are `GET {prefix}/{path}`, mutations are `POST {prefix}/{path}`
//! - mutation input is the raw JSON request body
//! - results and errors use the tRPC envelopes
//!
//! Batched calls and subscriptions are not supported.

pub mod envelope;
pub mod error;
pub mod input;
pub mod notes;

use axum::extract::{DefaultBodyLimit, Path};
use axum::routing::any;
use axum::Router;

use crate::state::AppState;

pub use envelope::RpcResponse;
pub use error::{RpcError, RpcErrorCode};
pub use input::RpcInput;

/// Mount point of the procedure router.
pub const RPC_PREFIX: &str = "/api/trpc";

async fn unknown_procedure(Path(path): Path<String>) -> RpcError {
    RpcError::not_found(format!("No procedure found on path \"{path}\"")).at(path)
}

/// All procedures, relative to [`RPC_PREFIX`]
///
/// Note text is unbounded, so axum's 2 MB default body limit is lifted here.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(notes::router())
        .route("/{path}", any(unknown_procedure))
        .layer(DefaultBodyLimit::disable())
}
