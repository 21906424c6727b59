//! The todo record and the payload accepted by create and update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Build a fresh record with a newly generated id.
    pub fn new(input: TodoInput) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            completed: input.completed,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field. `id` and `created_at` are left alone.
    pub fn apply(&mut self, input: TodoInput) {
        self.title = input.title;
        self.description = input.description;
        self.completed = input.completed;
        self.updated_at = Utc::now();
    }
}

/// Body of `POST /api/todos` and `PUT /api/todos/{id}`.
///
/// Missing text fields become empty strings so they are rejected by the
/// validator rather than by the JSON extractor.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TodoInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, description: &str, completed: bool) -> TodoInput {
        TodoInput {
            title: title.to_string(),
            description: description.to_string(),
            completed,
        }
    }

    #[test]
    fn todo_serializes_with_camel_case_fields() {
        let mut todo = Todo::new(input("Test", "Describe", false));
        todo.id = Uuid::nil();
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["title"], "Test");
        assert_eq!(json["description"], "Describe");
        assert_eq!(json["completed"], false);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }

    #[test]
    fn apply_keeps_identity_and_creation_time() {
        let mut todo = Todo::new(input("Old", "Old description", false));
        let (id, created_at) = (todo.id, todo.created_at);

        todo.apply(input("New", "New description", true));

        assert_eq!(todo.id, id);
        assert_eq!(todo.created_at, created_at);
        assert_eq!(todo.title, "New");
        assert_eq!(todo.description, "New description");
        assert!(todo.completed);
        assert!(todo.updated_at >= created_at);
    }

    #[test]
    fn input_defaults_missing_fields() {
        let input: TodoInput = serde_json::from_str(r#"{"title":"Only title"}"#).unwrap();
        assert_eq!(input.title, "Only title");
        assert!(input.description.is_empty());
        assert!(!input.completed);
    }

    #[test]
    fn input_accepts_explicit_completed() {
        let input: TodoInput =
            serde_json::from_str(r#"{"title":"Done","description":"d","completed":true}"#).unwrap();
        assert!(input.completed);
    }

    #[test]
    fn input_rejects_wrong_types() {
        let result: Result<TodoInput, _> = serde_json::from_str(r#"{"title":1}"#);
        assert!(result.is_err());
    }
}
