//! Driving port for todo reads.

use async_trait::async_trait;

use crate::domain::{Error, Todo, TodoId};

/// Domain use-case port for listing and fetching todos.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoQuery: Send + Sync {
    /// Return every todo, oldest first.
    async fn list(&self) -> Result<Vec<Todo>, Error>;

    /// Return the todo identified by `id`, or `None` when absent.
    async fn get(&self, id: TodoId) -> Result<Option<Todo>, Error>;
}
