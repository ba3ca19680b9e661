//! Driving port for todo mutations.
//!
//! Inbound adapters call this port after turning wire payloads into validated
//! domain values; the implementation owns persistence and not-found handling.

use async_trait::async_trait;

use crate::domain::{Error, Todo, TodoDraft, TodoId, TodoPatch};

/// Domain use-case port for creating, updating and deleting todos.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoCommand: Send + Sync {
    /// Persist a new todo and return it with its generated identifier.
    async fn create(&self, draft: TodoDraft) -> Result<Todo, Error>;

    /// Apply `patch` to the todo identified by `id` and return the result.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when no todo matches.
    async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo, Error>;

    /// Remove the todo identified by `id` and return the removed record.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when no todo matches.
    async fn delete(&self, id: TodoId) -> Result<Todo, Error>;
}
