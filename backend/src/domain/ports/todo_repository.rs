//! Driven port for todo persistence adapters and their errors.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Todo, TodoId, TodoPatch};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by todo repository adapters.
    pub enum TodoRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "todo repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "todo repository query failed: {message}",
    }
}

/// Storage for todo records.
///
/// Adapters translate between [`Todo`] and their own row representation and
/// never apply business rules.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Persist a newly created todo.
    async fn insert(&self, todo: &Todo) -> Result<(), TodoRepositoryError>;

    /// Return every stored todo, oldest first.
    async fn list(&self) -> Result<Vec<Todo>, TodoRepositoryError>;

    /// Fetch a todo by identifier.
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, TodoRepositoryError>;

    /// Apply `patch` to the stored todo in a single write and stamp
    /// `updated_at`.
    ///
    /// Fields the patch leaves out keep whatever value is stored at write
    /// time. Returns the record as stored, or `None` when no row matched `id`.
    async fn update(
        &self,
        id: &TodoId,
        patch: &TodoPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Todo>, TodoRepositoryError>;

    /// Remove a todo, returning the removed record when one matched.
    async fn delete(&self, id: &TodoId) -> Result<Option<Todo>, TodoRepositoryError>;
}
