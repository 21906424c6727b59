//! Error types for the todos API client.
//!
//! The server answers every API call with HTTP 200, so not-found and
//! invalid-input conditions are recovered from the envelope's `fail`
//! message. A non-200 status means something other than the todos API
//! answered and lands in `HttpError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The envelope reported that the todo does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The envelope reported that the payload failed validation.
    #[error("invalid data: {0}")]
    Invalid(String),

    /// Any other `fail` envelope, e.g. a storage fault on the server.
    #[error("request failed: {0}")]
    Fail(String),

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    /// Classify a `fail` envelope by its message.
    pub fn from_fail_message(message: String) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("tidak ditemukan") {
            ApiError::NotFound(message)
        } else if lower.contains("tidak valid") {
            ApiError::Invalid(message)
        } else {
            ApiError::Fail(message)
        }
    }
}
