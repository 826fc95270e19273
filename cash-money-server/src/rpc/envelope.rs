//! Success envelope: `{"result":{"data":...}}`

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Successful procedure output.
///
/// Void procedures serialize as `{"result":{}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse<T> {
    pub result: RpcResult<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResult<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> RpcResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            result: RpcResult { data: Some(data) },
        }
    }

    pub fn into_data(self) -> Option<T> {
        self.result.data
    }
}

impl RpcResponse<()> {
    pub fn empty() -> Self {
        Self {
            result: RpcResult { data: None },
        }
    }
}

impl<T: Serialize> IntoResponse for RpcResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
