//! `notes` procedures: create, list, remove
//!
//! Each procedure is a passthrough to the shared [`NoteStore`]: no business
//! rules beyond the input shape, no retries, storage errors surface as-is.
//!
//! [`NoteStore`]: crate::db::NoteStore

use axum::extract::State;
use axum::http::{Method, Uri};
use axum::routing::{get, post};
use axum::Router;

use super::envelope::RpcResponse;
use super::error::RpcError;
use super::input::{procedure_path, RpcInput};
use crate::models::{CreateNote, Note, RemoveNote};
use crate::state::AppState;

pub const CREATE: &str = "notes.create";
pub const LIST: &str = "notes.list";
pub const REMOVE: &str = "notes.remove";

/// Every procedure in the namespace.
pub const PROCEDURES: [&str; 3] = [CREATE, LIST, REMOVE];

/// POST notes.create - insert one note, return the stored row
async fn create(
    State(state): State<AppState>,
    RpcInput(input): RpcInput<CreateNote>,
) -> Result<RpcResponse<Note>, RpcError> {
    let note = state
        .notes()
        .create(input)
        .await
        .map_err(|e| RpcError::from(e).at(CREATE))?;

    tracing::debug!(id = note.id, "note created");
    Ok(RpcResponse::data(note))
}

/// GET notes.list - every stored note
async fn list(State(state): State<AppState>) -> Result<RpcResponse<Vec<Note>>, RpcError> {
    let notes = state
        .notes()
        .list()
        .await
        .map_err(|e| RpcError::from(e).at(LIST))?;

    Ok(RpcResponse::data(notes))
}

/// POST notes.remove - delete by id; unknown ids are a no-op
async fn remove(
    State(state): State<AppState>,
    RpcInput(RemoveNote { id }): RpcInput<RemoveNote>,
) -> Result<RpcResponse<()>, RpcError> {
    state
        .notes()
        .remove(id)
        .await
        .map_err(|e| RpcError::from(e).at(REMOVE))?;

    Ok(RpcResponse::empty())
}

async fn method_not_supported(method: Method, uri: Uri) -> RpcError {
    let path = procedure_path(&uri);
    RpcError::method_not_supported(format!("Unsupported {method} request to procedure \"{path}\""))
        .at(path)
}

/// Notes procedure routes, relative to the RPC prefix
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            &format!("/{CREATE}"),
            post(create).fallback(method_not_supported),
        )
        .route(&format!("/{LIST}"), get(list).fallback(method_not_supported))
        .route(
            &format!("/{REMOVE}"),
            post(remove).fallback(method_not_supported),
        )
}
