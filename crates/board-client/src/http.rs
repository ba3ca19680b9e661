//! Reqwest-backed [`TodoApi`] adapter.
//!
//! This adapter owns transport details only: URL construction, timeout,
//! HTTP status mapping and JSON decoding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::api::{TodoApi, TodoApiError};
use crate::todo::{CreateTodo, Todo, UpdateTodo};

const TODO_PATH: &str = "v1/todo";

/// Client for the todo backend rooted at a base URL such as
/// `http://localhost:3001`.
pub struct HttpTodoApi {
    client: Client,
    collection: Url,
}

impl HttpTodoApi {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TodoApiError::Transport`] when the reqwest client cannot be
    /// constructed or `base_url` cannot carry a path.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, TodoApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(map_transport_error)?;
        let collection = collection_url(base_url)?;
        Ok(Self { client, collection })
    }

    fn item_url(&self, id: Uuid) -> Url {
        let mut url = self.collection.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(&id.to_string());
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "sending todo request");
        self.client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json")
    }
}

/// Append `v1/todo` to the base URL, keeping any existing path prefix.
fn collection_url(base_url: &Url) -> Result<Url, TodoApiError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|()| TodoApiError::transport(format!("base URL {base_url} cannot be a base")))?
        .pop_if_empty()
        .extend(TODO_PATH.split('/'));
    Ok(url)
}

#[async_trait]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> Result<Vec<Todo>, TodoApiError> {
        let request = self.request(Method::GET, self.collection.clone());
        send_json(request, None).await
    }

    async fn get(&self, id: Uuid) -> Result<Option<Todo>, TodoApiError> {
        let request = self.request(Method::GET, self.item_url(id));
        send_json(request, Some(id)).await
    }

    async fn create(&self, body: &CreateTodo) -> Result<Todo, TodoApiError> {
        let request = self
            .request(Method::POST, self.collection.clone())
            .json(body);
        send_json(request, None).await
    }

    async fn update(&self, id: Uuid, body: &UpdateTodo) -> Result<Todo, TodoApiError> {
        let request = self.request(Method::PATCH, self.item_url(id)).json(body);
        send_json(request, Some(id)).await
    }

    async fn delete(&self, id: Uuid) -> Result<Todo, TodoApiError> {
        let request = self.request(Method::DELETE, self.item_url(id));
        send_json(request, Some(id)).await
    }
}

async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    id: Option<Uuid>,
) -> Result<T, TodoApiError> {
    let response = request.send().await.map_err(map_transport_error)?;
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    debug!(status = status.as_u16(), bytes = body.len(), "todo response received");
    if !status.is_success() {
        return Err(map_status_error(status, body.as_ref(), id));
    }
    serde_json::from_slice(body.as_ref())
        .map_err(|error| TodoApiError::decode(format!("invalid todo JSON payload: {error}")))
}

fn map_transport_error(error: reqwest::Error) -> TodoApiError {
    if error.is_timeout() {
        TodoApiError::transport(format!("timed out: {error}"))
    } else {
        TodoApiError::transport(error.to_string())
    }
}

/// Error envelope returned by the backend.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
    trace_id: Option<String>,
}

fn map_status_error(status: StatusCode, body: &[u8], id: Option<Uuid>) -> TodoApiError {
    if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
        return TodoApiError::NotFound { id };
    }
    TodoApiError::status(status.as_u16(), error_message(body))
}

fn error_message(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody {
            code,
            message: Some(message),
            trace_id,
        }) => {
            let mut text = match code {
                Some(code) => format!("{code}: {message}"),
                None => message,
            };
            if let Some(trace_id) = trace_id {
                text.push_str(&format!(" (trace {trace_id})"));
            }
            text
        }
        _ => body_preview(body),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
