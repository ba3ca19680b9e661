//! Todo HTTP handlers.
//!
//! ```text
//! POST   /v1/todo
//! GET    /v1/todo
//! GET    /v1/todo/{id}
//! PATCH  /v1/todo/{id}
//! DELETE /v1/todo/{id}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Error, Todo, TodoDraft, TodoPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, empty_update_error, json_error_handler, missing_field_error, parse_optional_status,
    parse_optional_title, parse_status, parse_title, parse_todo_id,
};

/// Request payload for creating a todo.
///
/// Both fields are required; they are optional here so a missing field is
/// reported as a validation error rather than a decode failure.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequestBody {
    #[schema(example = "Buy milk")]
    pub title: Option<String>,
    #[schema(example = "TODO")]
    pub status: Option<String>,
}

/// Partial update payload. At least one field must be present.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequestBody {
    #[schema(example = "Buy oat milk")]
    pub title: Option<String>,
    #[schema(example = "DONE")]
    pub status: Option<String>,
}

/// Todo as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(example = "Buy milk")]
    pub title: String,
    #[schema(example = "TODO")]
    pub status: String,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
}

impl From<Todo> for TodoBody {
    fn from(value: Todo) -> Self {
        Self {
            id: value.id.to_string(),
            title: value.title.into_inner(),
            status: value.status.as_str().to_owned(),
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

fn parse_create_payload(payload: CreateTodoRequestBody) -> Result<TodoDraft, Error> {
    let title_field = FieldName::new("title");
    let status_field = FieldName::new("status");

    let title = payload
        .title
        .ok_or_else(|| missing_field_error(title_field))?;
    let status = payload
        .status
        .ok_or_else(|| missing_field_error(status_field))?;

    Ok(TodoDraft {
        title: parse_title(title, title_field)?,
        status: parse_status(&status, status_field)?,
    })
}

fn parse_update_payload(payload: UpdateTodoRequestBody) -> Result<TodoPatch, Error> {
    let title = parse_optional_title(payload.title, FieldName::new("title"))?;
    let status = parse_optional_status(payload.status.as_deref(), FieldName::new("status"))?;
    TodoPatch::new(title, status).map_err(|_| empty_update_error())
}

/// Create a todo.
///
/// # Examples
/// ```no_run
/// use actix_web::{HttpResponse, web};
/// use backend::inbound::http::ApiResult;
/// use backend::inbound::http::state::HttpState;
/// use backend::inbound::http::todos::{CreateTodoRequestBody, create_todo};
///
/// async fn call_handler(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
///     let payload = web::Json(CreateTodoRequestBody {
///         title: Some("Buy milk".to_owned()),
///         status: Some("TODO".to_owned()),
///     });
///     create_todo(state, payload).await
/// }
/// ```
#[utoipa::path(
    post,
    path = "/v1/todo",
    request_body = CreateTodoRequestBody,
    responses(
        (status = 201, description = "Todo created", body = TodoBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["todos"],
    operation_id = "createTodo"
)]
#[post("")]
pub async fn create_todo(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTodoRequestBody>,
) -> ApiResult<HttpResponse> {
    let draft = parse_create_payload(payload.into_inner())?;
    let todo = state.todos.create(draft).await?;
    Ok(HttpResponse::Created().json(TodoBody::from(todo)))
}

/// List every todo, oldest first.
#[utoipa::path(
    get,
    path = "/v1/todo",
    responses(
        (status = 200, description = "All todos", body = [TodoBody]),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["todos"],
    operation_id = "listTodos"
)]
#[get("")]
pub async fn list_todos(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TodoBody>>> {
    let todos = state.todos_query.list().await?;
    debug!(count = todos.len(), "listed todos");
    Ok(web::Json(todos.into_iter().map(TodoBody::from).collect()))
}

/// Fetch one todo. An unknown id yields `null` rather than 404.
#[utoipa::path(
    get,
    path = "/v1/todo/{id}",
    params(("id" = String, Path, description = "Todo identifier (UUID)")),
    responses(
        (status = 200, description = "The todo, or null when absent", body = TodoBody),
        (status = 400, description = "Malformed id", body = Error)
    ),
    tags = ["todos"],
    operation_id = "getTodo"
)]
#[get("/{id}")]
pub async fn get_todo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Option<TodoBody>>> {
    let id = parse_todo_id(&path)?;
    let todo = state.todos_query.get(id).await?;
    Ok(web::Json(todo.map(TodoBody::from)))
}

/// Apply a partial update and return the updated todo.
#[utoipa::path(
    patch,
    path = "/v1/todo/{id}",
    params(("id" = String, Path, description = "Todo identifier (UUID)")),
    request_body = UpdateTodoRequestBody,
    responses(
        (status = 200, description = "Todo updated", body = TodoBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Todo not found", body = Error)
    ),
    tags = ["todos"],
    operation_id = "updateTodo"
)]
#[patch("/{id}")]
pub async fn update_todo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateTodoRequestBody>,
) -> ApiResult<web::Json<TodoBody>> {
    let id = parse_todo_id(&path)?;
    let patch = parse_update_payload(payload.into_inner())?;
    let todo = state.todos.update(id, patch).await?;
    Ok(web::Json(TodoBody::from(todo)))
}

/// Delete a todo and return the removed record.
#[utoipa::path(
    delete,
    path = "/v1/todo/{id}",
    params(("id" = String, Path, description = "Todo identifier (UUID)")),
    responses(
        (status = 200, description = "Todo deleted", body = TodoBody),
        (status = 400, description = "Malformed id", body = Error),
        (status = 404, description = "Todo not found", body = Error)
    ),
    tags = ["todos"],
    operation_id = "deleteTodo"
)]
#[delete("/{id}")]
pub async fn delete_todo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TodoBody>> {
    let id = parse_todo_id(&path)?;
    let removed = state.todos.delete(id).await?;
    Ok(web::Json(TodoBody::from(removed)))
}

/// Register the todo handlers under `/v1/todo`.
///
/// Malformed JSON bodies are answered with `invalid_request` instead of
/// actix's plain-text 400.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1/todo")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(create_todo)
            .service(list_todos)
            .service(get_todo)
            .service(update_todo)
            .service(delete_todo),
    );
}

#[cfg(test)]
#[path = "todos_tests.rs"]
mod tests;
