//! The `{status, message, data}` wrapper written for every API response.
//!
//! Responses are always HTTP 200; callers tell success from failure by
//! `status` alone.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
}

#[derive(Debug, Serialize)]
pub struct Envelope {
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    pub fn success(message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            data,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: Status::Fail,
            message: message.into(),
            data: None,
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_carries_data() {
        let envelope = Envelope::success("ok", Some(json!({ "id": 1 })));
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json, json!({ "status": "success", "message": "ok", "data": { "id": 1 } }));
    }

    #[test]
    fn fail_omits_data() {
        let json = serde_json::to_value(Envelope::fail("Data tidak valid")).unwrap();
        assert_eq!(json, json!({ "status": "fail", "message": "Data tidak valid" }));
    }

    #[test]
    fn fail_is_still_http_ok() {
        let response = Envelope::fail("nope").into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
