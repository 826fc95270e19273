//! RPC error envelope with IntoResponse
//!
//! Errors are rendered in the tRPC wire shape:
//!
//! ```json
//! {"error":{"message":"...","code":-32600,"data":{"code":"BAD_REQUEST","httpStatus":400,"path":"notes.create"}}}
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::db::DbError;

/// Error codes understood by tRPC clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RpcErrorCode {
    ParseError,
    BadRequest,
    NotFound,
    MethodNotSupported,
    PayloadTooLarge,
    InternalServerError,
}

impl RpcErrorCode {
    /// JSON-RPC 2.0 numeric code
    pub fn json_rpc_code(self) -> i32 {
        match self {
            Self::ParseError => -32700,
            Self::BadRequest => -32600,
            Self::NotFound => -32004,
            Self::MethodNotSupported => -32005,
            Self::PayloadTooLarge => -32013,
            Self::InternalServerError => -32603,
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            Self::ParseError | Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotSupported => StatusCode::METHOD_NOT_ALLOWED,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ParseError => "PARSE_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotSupported => "METHOD_NOT_SUPPORTED",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}

/// A failed procedure call
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}: {message}", .code.as_str())]
pub struct RpcError {
    pub code: RpcErrorCode,
    pub message: String,
    pub path: Option<String>,
}

impl RpcError {
    pub fn new(code: RpcErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::ParseError, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::NotFound, message)
    }

    pub fn method_not_supported(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::MethodNotSupported, message)
    }

    /// Map a body extraction rejection, keeping its status class.
    pub fn from_rejection(status: StatusCode, message: impl Into<String>) -> Self {
        let code = match status {
            StatusCode::PAYLOAD_TOO_LARGE => RpcErrorCode::PayloadTooLarge,
            s if s.is_server_error() => RpcErrorCode::InternalServerError,
            _ => RpcErrorCode::BadRequest,
        };
        Self::new(code, message)
    }

    /// Attach the procedure path the error came from.
    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl From<DbError> for RpcError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::Sqlx(inner) => Self::new(RpcErrorCode::InternalServerError, inner.to_string()),
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let status = self.code.status();
        if status.is_server_error() {
            tracing::error!(path = ?self.path, "Procedure failed: {}", self.message);
        } else {
            tracing::debug!(path = ?self.path, "Procedure rejected: {}", self.message);
        }

        let body = json!({
            "error": {
                "message": self.message,
                "code": self.code.json_rpc_code(),
                "data": {
                    "code": self.code,
                    "httpStatus": status.as_u16(),
                    "path": self.path,
                }
            }
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn bad_request_is_400_with_envelope() {
        let response = RpcError::bad_request("note: expected string")
            .at("notes.create")
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body(response).await;
        assert_eq!(body["error"]["code"], -32600);
        assert_eq!(body["error"]["message"], "note: expected string");
        assert_eq!(body["error"]["data"]["code"], "BAD_REQUEST");
        assert_eq!(body["error"]["data"]["httpStatus"], 400);
        assert_eq!(body["error"]["data"]["path"], "notes.create");
    }

    #[tokio::test]
    async fn storage_error_is_500_with_driver_message() {
        let err = RpcError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        let message = sqlx::Error::PoolTimedOut.to_string();
        let response = err.at("notes.list").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body(response).await;
        assert_eq!(body["error"]["data"]["code"], "INTERNAL_SERVER_ERROR");
        assert_eq!(body["error"]["message"], message);
    }

    #[test]
    fn codes_map_to_statuses() {
        assert_eq!(RpcErrorCode::ParseError.status(), StatusCode::BAD_REQUEST);
        assert_eq!(RpcErrorCode::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            RpcErrorCode::MethodNotSupported.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn oversized_body_rejection_keeps_413() {
        let err = RpcError::from_rejection(StatusCode::PAYLOAD_TOO_LARGE, "length limit exceeded");
        assert_eq!(err.code, RpcErrorCode::PayloadTooLarge);
        assert_eq!(err.code.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(serde_json::to_value(err.code).unwrap(), "PAYLOAD_TOO_LARGE");
    }

    #[test]
    fn display_includes_code_name() {
        let err = RpcError::not_found("no procedure");
        assert_eq!(err.to_string(), "NOT_FOUND: no procedure");
    }
}
