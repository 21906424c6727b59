//! Todos HTTP service.
//!
//! # Overview
//! CRUD over todo items at `/api/todos`, plus a greeting at `/` and a
//! liveness probe at `/health`. Every API response is a
//! `{status, message, data}` envelope sent with HTTP 200.
//!
//! # Design
//! - The store is built by the caller and handed to the router as state;
//!   there is no global instance.
//! - The route table is assembled once in [`app_with_store`].
//! - Handlers return [`error::Result`], so validation, not-found and storage
//!   faults all funnel through one `IntoResponse` impl.

pub mod config;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod store;
pub mod todo;
pub mod validate;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use envelope::{Envelope, Status};
pub use error::ApiError;
pub use handlers::SharedStore;
pub use store::{MemoryStore, StoreError, TodoStore};
pub use todo::{Todo, TodoInput};

/// Router backed by a fresh in-memory store.
pub fn app() -> Router {
    app_with_store(Arc::new(MemoryStore::new()))
}

pub fn app_with_store(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route(
            "/api/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/api/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .fallback(handlers::unmatched)
        .method_not_allowed_fallback(handlers::unmatched)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
