//! OpenAPI documentation for the todo API.
//!
//! [`ApiDoc`] registers the todo and health endpoints together with the
//! request, response and error schemas. Swagger UI serves it in debug builds
//! and `cargo run --bin openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::todos::{CreateTodoRequestBody, TodoBody, UpdateTodoRequestBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo board API",
        description = "CRUD interface for todos grouped into TODO, INPROGRESS and DONE columns."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::todos::create_todo,
        crate::inbound::http::todos::list_todos,
        crate::inbound::http::todos::get_todo,
        crate::inbound::http::todos::update_todo,
        crate::inbound::http::todos::delete_todo,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        TodoBody,
        CreateTodoRequestBody,
        UpdateTodoRequestBody,
        Error,
        ErrorCode
    )),
    tags(
        (name = "todos", description = "Create, read, update and delete todos"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
