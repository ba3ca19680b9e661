//! Board state container.
//!
//! [`BoardStore`] owns the client's copy of the todos plus the create input,
//! the edit state and the last error. Every mutation goes to the server first;
//! the local copy only changes once the server has answered successfully.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::api::{TodoApi, TodoApiError};
use crate::todo::{CreateTodo, Todo, TodoStatus, UpdateTodo};

/// Failures surfaced to the user of the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Title was empty or whitespace only.
    #[error("title must not be empty")]
    EmptyTitle,
    /// The id does not match any todo on the board.
    #[error("todo {id} is not on the board")]
    UnknownTodo {
        /// Identifier that did not match.
        id: Uuid,
    },
    /// An edit was committed while no todo was being edited.
    #[error("no todo is being edited")]
    NotEditing,
    /// The server request failed.
    #[error(transparent)]
    Api(#[from] TodoApiError),
}

/// In-progress title edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    /// Todo being edited.
    pub id: Uuid,
    /// Current text of the title field.
    pub title: String,
}

/// Client-side board state.
pub struct BoardStore {
    api: Arc<dyn TodoApi>,
    todos: Vec<Todo>,
    create_input: String,
    editing: Option<EditState>,
    last_error: Option<BoardError>,
}

impl BoardStore {
    /// Create an empty board backed by `api`. Call [`Self::load`] to populate it.
    #[must_use]
    pub fn new(api: Arc<dyn TodoApi>) -> Self {
        Self {
            api,
            todos: Vec::new(),
            create_input: String::new(),
            editing: None,
            last_error: None,
        }
    }

    /// Todos in board order.
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Todos in `status`'s column, in board order.
    pub fn column(&self, status: TodoStatus) -> impl Iterator<Item = &Todo> {
        self.todos.iter().filter(move |todo| todo.status == status)
    }

    /// Current text of the create field.
    #[must_use]
    pub fn create_input(&self) -> &str {
        &self.create_input
    }

    /// Replace the text of the create field.
    pub fn set_create_input(&mut self, value: impl Into<String>) {
        self.create_input = value.into();
    }

    /// Active edit, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<&EditState> {
        self.editing.as_ref()
    }

    /// Failure from the most recent operation. Cleared by the next success.
    #[must_use]
    pub const fn last_error(&self) -> Option<&BoardError> {
        self.last_error.as_ref()
    }

    /// Replace the local collection with the server's list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Api`] when the list request fails; the current
    /// collection is kept.
    pub async fn load(&mut self) -> Result<(), BoardError> {
        let result = self.api.list().await.map_err(BoardError::from);
        let todos = self.settle(result)?;
        debug!(count = todos.len(), "board loaded");
        self.todos = todos;
        Ok(())
    }

    /// Fetch `id` from the server and store the server's copy locally.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Api`] when the request fails, wrapping
    /// [`TodoApiError::NotFound`] when the server has no such todo. The local
    /// collection is kept in both cases.
    pub async fn refresh(&mut self, id: Uuid) -> Result<Todo, BoardError> {
        let result = match self.api.get(id).await {
            Ok(Some(todo)) => Ok(todo),
            Ok(None) => Err(BoardError::Api(TodoApiError::NotFound { id })),
            Err(err) => Err(BoardError::from(err)),
        };
        let todo = self.settle(result)?;
        self.replace(todo.clone());
        Ok(todo)
    }

    /// Create a todo from the create input in the `TODO` column.
    ///
    /// Blank input is rejected without a request. On success the server's
    /// record is appended and the input cleared.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyTitle`] for blank input or
    /// [`BoardError::Api`] when the request fails.
    pub async fn create(&mut self) -> Result<Todo, BoardError> {
        let result = match non_blank(&self.create_input) {
            Ok(title) => {
                let request = CreateTodo {
                    title: title.to_owned(),
                    status: TodoStatus::Todo,
                };
                self.api.create(&request).await.map_err(BoardError::from)
            }
            Err(err) => Err(err),
        };
        let todo = self.settle(result)?;
        self.create_input.clear();
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Enter edit mode for `id`, seeded with its current title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownTodo`] when `id` is not on the board.
    pub fn begin_edit(&mut self, id: Uuid) -> Result<(), BoardError> {
        let result = self.find(id).map(|todo| todo.title.clone());
        let title = self.settle(result)?;
        self.editing = Some(EditState { id, title });
        Ok(())
    }

    /// Replace the text of the edit field.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotEditing`] outside edit mode.
    pub fn set_edit_title(&mut self, value: impl Into<String>) -> Result<(), BoardError> {
        let edit = self.editing.as_mut().ok_or(BoardError::NotEditing)?;
        edit.title = value.into();
        Ok(())
    }

    /// Leave edit mode without sending anything.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Send the edited title and replace the local record with the server's.
    ///
    /// Blank titles are rejected without a request and keep edit mode open,
    /// as does a failed request.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotEditing`], [`BoardError::EmptyTitle`] or
    /// [`BoardError::Api`].
    pub async fn commit_edit(&mut self) -> Result<(), BoardError> {
        let result = match self.editing.as_ref() {
            None => Err(BoardError::NotEditing),
            Some(edit) => match non_blank(&edit.title) {
                Ok(title) => {
                    let request = UpdateTodo::title(title.to_owned());
                    self.api
                        .update(edit.id, &request)
                        .await
                        .map_err(BoardError::from)
                }
                Err(err) => Err(err),
            },
        };
        let todo = self.settle(result)?;
        self.editing = None;
        self.replace(todo);
        Ok(())
    }

    /// Delete `id` on the server, then remove it locally.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownTodo`] when `id` is not on the board or
    /// [`BoardError::Api`] when the server does not confirm the removal; the
    /// local record is kept in both cases.
    pub async fn delete(&mut self, id: Uuid) -> Result<(), BoardError> {
        let result = match self.find(id) {
            Ok(_) => self.api.delete(id).await.map_err(BoardError::from),
            Err(err) => Err(err),
        };
        let removed = self.settle(result)?;
        self.todos.retain(|todo| todo.id != removed.id);
        if self.editing.as_ref().is_some_and(|edit| edit.id == removed.id) {
            self.editing = None;
        }
        Ok(())
    }

    /// Move `id` to the `status` column.
    ///
    /// Serves both dropping a card on a column and editing its status.
    /// Moving to the column the todo already sits in sends nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownTodo`] or [`BoardError::Api`].
    pub async fn set_status(&mut self, id: Uuid, status: TodoStatus) -> Result<(), BoardError> {
        let current = self.find(id).map(|todo| todo.status);
        let result = match current {
            Ok(current) if current == status => {
                debug!(%id, %status, "todo already in column");
                self.last_error = None;
                return Ok(());
            }
            Ok(_) => self
                .api
                .update(id, &UpdateTodo::status(status))
                .await
                .map_err(BoardError::from),
            Err(err) => Err(err),
        };
        let todo = self.settle(result)?;
        self.replace(todo);
        Ok(())
    }

    fn find(&self, id: Uuid) -> Result<&Todo, BoardError> {
        self.todos
            .iter()
            .find(|todo| todo.id == id)
            .ok_or(BoardError::UnknownTodo { id })
    }

    fn replace(&mut self, todo: Todo) {
        match self.todos.iter_mut().find(|existing| existing.id == todo.id) {
            Some(existing) => *existing = todo,
            None => self.todos.push(todo),
        }
    }

    /// Record the outcome of an operation in `last_error`.
    fn settle<T>(&mut self, result: Result<T, BoardError>) -> Result<T, BoardError> {
        match &result {
            Ok(_) => self.last_error = None,
            Err(err) => {
                warn!(error = %err, "board operation failed");
                self.last_error = Some(err.clone());
            }
        }
        result
    }
}

fn non_blank(value: &str) -> Result<&str, BoardError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(BoardError::EmptyTitle)
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
