//! Stateless request builder and envelope parser for the todos API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes the matching `HttpResponse`, so the client itself never
//! performs I/O.

use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Envelope, Todo, TodoInput};

#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    fn item_url(&self, id: Uuid) -> String {
        format!("{}/api/todos/{id}", self.base_url)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Get, self.collection_url())
    }

    pub fn build_get_todo(&self, id: Uuid) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Get, self.item_url(id))
    }

    pub fn build_create_todo(&self, input: &TodoInput) -> Result<HttpRequest, ApiError> {
        let body = to_body(input)?;
        Ok(HttpRequest::json(HttpMethod::Post, self.collection_url(), body))
    }

    pub fn build_update_todo(&self, id: Uuid, input: &TodoInput) -> Result<HttpRequest, ApiError> {
        let body = to_body(input)?;
        Ok(HttpRequest::json(HttpMethod::Put, self.item_url(id), body))
    }

    pub fn build_delete_todo(&self, id: Uuid) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Delete, self.item_url(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        let data = open(response)?;
        field(data, "todos")
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        let data = open(response)?;
        field(data, "todo")
    }

    /// Returns the id the server assigned to the new todo.
    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Uuid, ApiError> {
        let data = open(response)?;
        field(data, "id")
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        let data = open(response)?;
        field(data, "todo")
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        open(response)?;
        Ok(())
    }
}

fn to_body(input: &TodoInput) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

/// Check the transport status, decode the envelope, and turn a `fail`
/// envelope into the matching `ApiError`. Yields the `data` object.
fn open(response: HttpResponse) -> Result<Option<Value>, ApiError> {
    if response.status != 200 {
        return Err(ApiError::HttpError {
            status: response.status,
            body: response.body,
        });
    }
    let envelope: Envelope = serde_json::from_str(&response.body)
        .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
    if !envelope.is_success() {
        return Err(ApiError::from_fail_message(envelope.message));
    }
    Ok(envelope.data)
}

fn field<T: DeserializeOwned>(data: Option<Value>, key: &str) -> Result<T, ApiError> {
    let value = data
        .and_then(|mut data| data.get_mut(key).map(Value::take))
        .ok_or_else(|| ApiError::DeserializationError(format!("missing data.{key}")))?;
    serde_json::from_value(value).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
