//! Todo domain service.
//!
//! Implements the [`TodoCommand`] and [`TodoQuery`] driving ports on top of a
//! [`TodoRepository`]. Repository failures are mapped onto domain errors:
//! connection problems surface as `service_unavailable`, everything else as
//! `internal_error`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use tracing::info;

use crate::domain::ports::{TodoCommand, TodoQuery, TodoRepository, TodoRepositoryError};
use crate::domain::{Error, Todo, TodoDraft, TodoId, TodoPatch};

fn map_repository_error(error: TodoRepositoryError) -> Error {
    match error {
        TodoRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("todo repository unavailable: {message}"))
        }
        TodoRepositoryError::Query { message } => {
            Error::internal(format!("todo repository error: {message}"))
        }
    }
}

/// Current time at the microsecond precision the database keeps.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn todo_not_found(id: TodoId) -> Error {
    Error::not_found(format!("todo {id} not found"))
}

/// Todo service implementing both command and query ports.
#[derive(Clone)]
pub struct TodoService<R> {
    repository: Arc<R>,
}

impl<R> TodoService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> TodoCommand for TodoService<R>
where
    R: TodoRepository,
{
    async fn create(&self, draft: TodoDraft) -> Result<Todo, Error> {
        let todo = Todo::create(TodoId::random(), draft, now());
        self.repository
            .insert(&todo)
            .await
            .map_err(map_repository_error)?;
        info!(todo_id = %todo.id, status = %todo.status, "todo created");
        Ok(todo)
    }

    async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo, Error> {
        let updated = self
            .repository
            .update(&id, &patch, now())
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| todo_not_found(id))?;

        info!(todo_id = %id, status = %updated.status, "todo updated");
        Ok(updated)
    }

    async fn delete(&self, id: TodoId) -> Result<Todo, Error> {
        let removed = self
            .repository
            .delete(&id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| todo_not_found(id))?;
        info!(todo_id = %id, "todo deleted");
        Ok(removed)
    }
}

#[async_trait]
impl<R> TodoQuery for TodoService<R>
where
    R: TodoRepository,
{
    async fn list(&self) -> Result<Vec<Todo>, Error> {
        self.repository.list().await.map_err(map_repository_error)
    }

    async fn get(&self, id: TodoId) -> Result<Option<Todo>, Error> {
        self.repository
            .find_by_id(&id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "todo_service_tests.rs"]
mod tests;
