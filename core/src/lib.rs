//! Client core for the todos service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller executes the round-trip, which keeps the
//! core deterministic and lets any HTTP stack drive it.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - The server reports every outcome with HTTP 200 and a
//!   `{status, message, data}` envelope; `parse_*` unwraps the envelope and
//!   maps `fail` messages onto `ApiError` variants.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Envelope, Todo, TodoInput};
