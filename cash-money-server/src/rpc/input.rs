//! Procedure input extractor
//!
//! Decodes the request body as the procedure's input type. Malformed JSON is
//! a `PARSE_ERROR`; JSON of the wrong shape is a `BAD_REQUEST`. Neither
//! reaches the store. Content-Type is not checked, and the RPC router lifts
//! axum's default body limit so `note` has no size cap of its own.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::Uri;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::RpcError;

/// Structurally validated procedure input
#[derive(Debug, Clone)]
pub struct RpcInput<T>(pub T);

impl<T, S> FromRequest<S> for RpcInput<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RpcError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = procedure_path(req.uri()).to_owned();

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| RpcError::from_rejection(e.status(), e.body_text()).at(path.as_str()))?;

        Ok(Self(decode(&bytes).map_err(|e| e.at(path))?))
    }
}

/// Decode a procedure input from raw body bytes.
///
/// An empty body is treated as a missing input (`null`).
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, RpcError> {
    let value: Value = if bytes.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(bytes).map_err(|e| RpcError::parse(format!("invalid JSON: {e}")))?
    };

    serde_json::from_value(value).map_err(|e| RpcError::bad_request(format!("invalid input: {e}")))
}

/// Last path segment, e.g. `notes.create` for `/api/trpc/notes.create`.
pub fn procedure_path(uri: &Uri) -> &str {
    uri.path().rsplit('/').next().unwrap_or_default()
}
