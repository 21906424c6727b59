//! Handler-level failures and how they are reported.
//!
//! None of these escalate to an HTTP error status: each one becomes a `fail`
//! envelope with a human-readable message.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::envelope::Envelope;
use crate::store::StoreError;
use crate::validate::ValidationError;

pub const MSG_INVALID: &str = "Data tidak valid";
pub const MSG_NOT_FOUND: &str = "Data todo tidak ditemukan";
pub const MSG_INTERNAL: &str = "Terjadi kesalahan pada server";

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("todo not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Invalid(_) => MSG_INVALID,
            ApiError::NotFound => MSG_NOT_FOUND,
            ApiError::Store(_) => MSG_INTERNAL,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Invalid(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Invalid(rejection.body_text())
    }
}

// A segment that is not a UUID cannot name any stored todo.
impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::NotFound
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Invalid(reason) => tracing::debug!(%reason, "rejected invalid todo input"),
            ApiError::NotFound => tracing::debug!("todo not found"),
            ApiError::Store(err) => tracing::error!(error = %err, "todo store failure"),
        }
        Envelope::fail(self.message()).into_response()
    }
}
