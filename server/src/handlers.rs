//! Request handlers for `/` and `/api/todos`.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{Method, Uri},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::envelope::Envelope;
use crate::error::{ApiError, Result};
use crate::store::TodoStore;
use crate::todo::TodoInput;
use crate::validate::validate;

pub type SharedStore = Arc<dyn TodoStore>;

pub const GREETING: &str = "Hay, selamat datang di layanan Todos!";

pub async fn home() -> &'static str {
    GREETING
}

pub const MSG_NO_ROUTE: &str = "Endpoint tidak ditemukan";

/// Unknown paths and unsupported methods still answer with an envelope.
pub async fn unmatched(method: Method, uri: Uri) -> Envelope {
    tracing::debug!(%method, %uri, "no route");
    Envelope::fail(MSG_NO_ROUTE)
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

/// Unwrap the body and run the required-field checks on it.
fn validated(
    payload: std::result::Result<Json<TodoInput>, JsonRejection>,
) -> Result<TodoInput> {
    let Json(input) = payload?;
    validate(&input.title, &input.description)?;
    Ok(input)
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    payload: std::result::Result<Json<TodoInput>, JsonRejection>,
) -> Result<Envelope> {
    let input = validated(payload)?;
    let todo = store.create(input).await?;
    tracing::info!(id = %todo.id, "todo created");
    Ok(Envelope::success(
        "Berhasil menambahkan data todo",
        Some(json!({ "id": todo.id })),
    ))
}

pub async fn list_todos(State(store): State<SharedStore>) -> Result<Envelope> {
    let todos = store.list().await?;
    Ok(Envelope::success(
        "Berhasil mengambil data todos",
        Some(json!({ "todos": todos })),
    ))
}

pub async fn get_todo(
    State(store): State<SharedStore>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
) -> Result<Envelope> {
    let Path(id) = id?;
    let todo = store.get(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Envelope::success(
        "Berhasil mengambil data todo",
        Some(json!({ "todo": todo })),
    ))
}

pub async fn update_todo(
    State(store): State<SharedStore>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
    payload: std::result::Result<Json<TodoInput>, JsonRejection>,
) -> Result<Envelope> {
    let input = validated(payload)?;
    let Path(id) = id?;
    let todo = store.update(id, input).await?.ok_or(ApiError::NotFound)?;
    tracing::info!(%id, "todo updated");
    Ok(Envelope::success(
        "Data todo berhasil diperbarui",
        Some(json!({ "todo": todo })),
    ))
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
) -> Result<Envelope> {
    let Path(id) = id?;
    if !store.delete(id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!(%id, "todo deleted");
    Ok(Envelope::success("Data todo berhasil dihapus", None))
}
