//! Persistence for todos.
//!
//! Handlers only see the [`TodoStore`] trait; [`MemoryStore`] is the
//! implementation the binary wires in. Every operation takes the store lock
//! exactly once, so a single call is atomic and two calls touching the same
//! id never interleave.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::todo::{Todo, TodoInput};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        StoreError::Unavailable(msg.into())
    }
}

/// CRUD over the todo collection. `None`/`false` mean the id has no live
/// record; `Err` is reserved for faults in the storage layer itself.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    async fn create(&self, input: TodoInput) -> Result<Todo, StoreError>;
    async fn get(&self, id: Uuid) -> Result<Option<Todo>, StoreError>;
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;
    async fn update(&self, id: Uuid, input: TodoInput) -> Result<Option<Todo>, StoreError>;
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

#[derive(Default)]
struct Inner {
    todos: HashMap<Uuid, Todo>,
    // insertion order for `list`
    order: Vec<Uuid>,
}

/// Process-lifetime store behind a single `RwLock`.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn create(&self, input: TodoInput) -> Result<Todo, StoreError> {
        let todo = Todo::new(input);
        let mut inner = self.inner.write().await;
        inner.order.push(todo.id);
        inner.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Todo>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.todos.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.todos.get(id).cloned())
            .collect())
    }

    async fn update(&self, id: Uuid, input: TodoInput) -> Result<Option<Todo>, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.todos.get_mut(&id).map(|todo| {
            todo.apply(input);
            todo.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.todos.remove(&id).is_none() {
            return Ok(false);
        }
        inner.order.retain(|existing| *existing != id);
        Ok(true)
    }
}
