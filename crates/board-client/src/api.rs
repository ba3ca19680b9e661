//! Port to the todo backend.
//!
//! [`BoardStore`](crate::BoardStore) talks to the server only through
//! [`TodoApi`], so store behaviour can be exercised against a mock.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::todo::{CreateTodo, Todo, UpdateTodo};

/// Failures raised by [`TodoApi`] implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoApiError {
    /// The request never produced a response (connection, timeout, TLS).
    #[error("todo request failed: {message}")]
    Transport {
        /// Transport failure description.
        message: String,
    },
    /// The server answered with a non-success status other than 404.
    #[error("todo server responded with status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message or a preview of the body.
        message: String,
    },
    /// The response body was not the expected JSON.
    #[error("invalid todo response: {message}")]
    Decode {
        /// Decoder error description.
        message: String,
    },
    /// The addressed todo does not exist on the server.
    #[error("todo {id} not found")]
    NotFound {
        /// Identifier that did not match.
        id: Uuid,
    },
}

impl TodoApiError {
    /// Construct a [`TodoApiError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Construct a [`TodoApiError::Status`].
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Construct a [`TodoApiError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// CRUD operations on the `/v1/todo` resource.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoApi: Send + Sync {
    /// Fetch every todo in server order.
    async fn list(&self) -> Result<Vec<Todo>, TodoApiError>;

    /// Fetch one todo; `None` when the id is unknown.
    async fn get(&self, id: Uuid) -> Result<Option<Todo>, TodoApiError>;

    /// Create a todo and return the stored record.
    async fn create(&self, request: &CreateTodo) -> Result<Todo, TodoApiError>;

    /// Apply a partial update and return the stored record.
    async fn update(&self, id: Uuid, request: &UpdateTodo) -> Result<Todo, TodoApiError>;

    /// Delete a todo and return the removed record.
    async fn delete(&self, id: Uuid) -> Result<Todo, TodoApiError>;
}
