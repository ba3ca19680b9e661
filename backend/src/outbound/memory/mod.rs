//! In-process todo storage used when no database URL is configured.
//!
//! Records live in a `Vec` behind a lock and vanish when the process exits.
//! Ordering matches the Diesel adapter: oldest `created_at` first, ties broken
//! by id.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{TodoRepository, TodoRepositoryError};
use crate::domain::{Todo, TodoId, TodoPatch};

/// `TodoRepository` backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    todos: RwLock<Vec<Todo>>,
}

impl InMemoryTodoRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Todo>> {
        self.todos.read().unwrap_or_else(|err| err.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Todo>> {
        self.todos.write().unwrap_or_else(|err| err.into_inner())
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, todo: &Todo) -> Result<(), TodoRepositoryError> {
        let mut todos = self.write();
        if todos.iter().any(|existing| existing.id == todo.id) {
            return Err(TodoRepositoryError::query(format!(
                "todo {} already exists",
                todo.id
            )));
        }
        todos.push(todo.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        let mut todos = self.read().clone();
        todos.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        Ok(todos)
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, TodoRepositoryError> {
        Ok(self.read().iter().find(|todo| todo.id == *id).cloned())
    }

    async fn update(
        &self,
        id: &TodoId,
        patch: &TodoPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Todo>, TodoRepositoryError> {
        let mut todos = self.write();
        let Some(slot) = todos.iter_mut().find(|existing| existing.id == *id) else {
            return Ok(None);
        };
        *slot = slot.clone().apply(patch.clone(), updated_at);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: &TodoId) -> Result<Option<Todo>, TodoRepositoryError> {
        let mut todos = self.write();
        let position = todos.iter().position(|todo| todo.id == *id);
        Ok(position.map(|index| todos.remove(index)))
    }
}
