//! PostgreSQL-backed `TodoRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::{debug, warn};

use crate::domain::ports::{TodoRepository, TodoRepositoryError};
use crate::domain::{Todo, TodoId, TodoPatch, TodoStatus, TodoTitle};

use super::models::{NewTodoRow, TodoChangeset, TodoRow};
use super::pool::{DbPool, PoolError};
use super::schema::todos;

/// Diesel-backed implementation of the `TodoRepository` port.
#[derive(Clone)]
pub struct DieselTodoRepository {
    pool: DbPool,
}

impl DieselTodoRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TodoRepositoryError {
    TodoRepositoryError::connection(error.message())
}

fn map_diesel_error(error: diesel::result::Error) -> TodoRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => TodoRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => TodoRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            TodoRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            TodoRepositoryError::query("todo violates a table constraint")
        }
        _ => TodoRepositoryError::query("database error"),
    }
}

/// Convert a database row into a domain todo.
///
/// The CHECK constraints should make a bad status or blank title
/// unreachable; if one slips through it is reported as a query error.
fn row_to_todo(row: TodoRow) -> Result<Todo, TodoRepositoryError> {
    let status = row.status.parse::<TodoStatus>().map_err(|err| {
        warn!(
            value = row.status.as_str(),
            todo_id = %row.id,
            "unrecognised status value in todos table"
        );
        TodoRepositoryError::query(format!("stored todo {} is invalid: {err}", row.id))
    })?;
    let title = TodoTitle::new(row.title).map_err(|err| {
        TodoRepositoryError::query(format!("stored todo {} is invalid: {err}", row.id))
    })?;

    Ok(Todo {
        id: TodoId::from_uuid(row.id),
        title,
        status,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[async_trait]
impl TodoRepository for DieselTodoRepository {
    async fn insert(&self, todo: &Todo) -> Result<(), TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewTodoRow {
            id: *todo.id.as_uuid(),
            title: todo.title.as_ref(),
            status: todo.status.as_str(),
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        };

        diesel::insert_into(todos::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list(&self) -> Result<Vec<Todo>, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TodoRow> = todos::table
            .order((todos::created_at.asc(), todos::id.asc()))
            .select(TodoRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_todo).collect()
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TodoRow> = todos::table
            .find(*id.as_uuid())
            .select(TodoRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_todo).transpose()
    }

    async fn update(
        &self,
        id: &TodoId,
        patch: &TodoPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Todo>, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = TodoChangeset {
            title: patch.new_title().map(|title| title.as_ref()),
            status: patch.new_status().map(|status| status.as_str()),
            updated_at,
        };

        let updated: Option<TodoRow> = diesel::update(todos::table.find(*id.as_uuid()))
            .set(&changeset)
            .returning(TodoRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        updated.map(row_to_todo).transpose()
    }

    async fn delete(&self, id: &TodoId) -> Result<Option<Todo>, TodoRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed: Option<TodoRow> = diesel::delete(todos::table.find(*id.as_uuid()))
            .returning(TodoRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        removed.map(row_to_todo).transpose()
    }
}
