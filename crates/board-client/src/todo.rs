//! Todo records as exchanged with the backend.
//!
//! The client keeps only what it renders: identifier, title and status.
//! Server timestamps are accepted on the wire and ignored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Board column a todo belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TodoStatus {
    /// Not started.
    #[serde(rename = "TODO")]
    Todo,
    /// Being worked on.
    #[serde(rename = "INPROGRESS")]
    InProgress,
    /// Finished.
    #[serde(rename = "DONE")]
    Done,
}

impl TodoStatus {
    /// Columns in display order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Wire and display name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "INPROGRESS",
            Self::Done => "DONE",
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when text does not name one of the three columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status {value:?}; expected TODO, INPROGRESS or DONE")]
pub struct ParseStatusError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for TodoStatus {
    type Err = ParseStatusError;

    /// Parse a status name. Matching ignores ASCII case so `done` is accepted
    /// on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStatusError {
                value: s.to_owned(),
            })
    }
}

/// A todo as held on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Server-assigned identifier.
    pub id: Uuid,
    /// Display title.
    pub title: String,
    /// Column the todo sits in.
    pub status: TodoStatus,
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTodo {
    /// Title of the new todo.
    pub title: String,
    /// Initial column.
    pub status: TodoStatus,
}

/// Body of a partial update. Absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateTodo {
    /// Replacement title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TodoStatus>,
}

impl UpdateTodo {
    /// Update that only renames.
    #[must_use]
    pub const fn title(title: String) -> Self {
        Self {
            title: Some(title),
            status: None,
        }
    }

    /// Update that only moves the todo to another column.
    #[must_use]
    pub const fn status(status: TodoStatus) -> Self {
        Self {
            title: None,
            status: Some(status),
        }
    }
}
