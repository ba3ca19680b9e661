//! Todo aggregate and its value types.
//!
//! A todo is a titled task sitting in one of three board columns. Titles and
//! statuses are validated on construction so every [`Todo`] held by the
//! domain satisfies:
//!
//! - the title is non-empty once trimmed of whitespace;
//! - the status is one of `TODO`, `INPROGRESS` or `DONE`;
//! - `updated_at` is never earlier than `created_at`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors raised while building todo values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoValidationError {
    /// Title was empty or whitespace only.
    #[error("title must not be empty")]
    EmptyTitle,
    /// Status was not one of the board columns.
    #[error("status must be one of TODO, INPROGRESS, DONE (got {input})")]
    UnknownStatus {
        /// Raw value supplied by the caller.
        input: String,
    },
    /// Identifier was not a UUID.
    #[error("todo id must be a valid UUID")]
    InvalidId,
    /// Update carried neither a title nor a status.
    #[error("update must include a title or a status")]
    EmptyPatch,
}

/// Server-generated todo identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = TodoValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| TodoValidationError::InvalidId)
    }
}

/// Non-empty todo title.
///
/// # Examples
/// ```
/// use backend::domain::TodoTitle;
///
/// let title = TodoTitle::new("Buy milk").expect("valid title");
/// assert_eq!(title.as_ref(), "Buy milk");
/// assert!(TodoTitle::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Validate and wrap a title. The value is stored as supplied.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }
        Ok(Self(value))
    }

    /// Consume the title and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

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
    /// Every status in board column order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Wire and storage representation.
    pub fn as_str(&self) -> &'static str {
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

impl FromStr for TodoStatus {
    type Err = TodoValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "TODO" => Ok(Self::Todo),
            "INPROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            _ => Err(TodoValidationError::UnknownStatus {
                input: value.to_owned(),
            }),
        }
    }
}

/// Validated input for creating a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: TodoTitle,
    pub status: TodoStatus,
}

/// Partial update applied to an existing todo.
///
/// At least one field is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPatch {
    title: Option<TodoTitle>,
    status: Option<TodoStatus>,
}

impl TodoPatch {
    /// Build a patch, rejecting one that would change nothing.
    pub fn new(
        title: Option<TodoTitle>,
        status: Option<TodoStatus>,
    ) -> Result<Self, TodoValidationError> {
        if title.is_none() && status.is_none() {
            return Err(TodoValidationError::EmptyPatch);
        }
        Ok(Self { title, status })
    }

    /// Patch changing only the status.
    pub fn status(status: TodoStatus) -> Self {
        Self {
            title: None,
            status: Some(status),
        }
    }

    /// Patch changing only the title.
    pub fn title(title: TodoTitle) -> Self {
        Self {
            title: Some(title),
            status: None,
        }
    }

    /// New title, when the patch carries one.
    pub fn new_title(&self) -> Option<&TodoTitle> {
        self.title.as_ref()
    }

    /// New status, when the patch carries one.
    pub fn new_status(&self) -> Option<TodoStatus> {
        self.status
    }
}

/// Persisted todo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: TodoTitle,
    pub status: TodoStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Create a new todo from a validated draft.
    pub fn create(id: TodoId, draft: TodoDraft, now: DateTime<Utc>) -> Self {
        let TodoDraft { title, status } = draft;
        Self {
            id,
            title,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Return a copy with `patch` applied and `updated_at` refreshed.
    #[must_use]
    pub fn apply(mut self, patch: TodoPatch, now: DateTime<Utc>) -> Self {
        let TodoPatch { title, status } = patch;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(status) = status {
            self.status = status;
        }
        self.updated_at = now.max(self.created_at);
        self
    }
}

#[cfg(test)]
mod tests;
