//! Request validation helpers for the todo endpoints.
//!
//! Every failure becomes an `invalid_request` domain error whose `details`
//! carry `{field, code[, value]}` so clients can point at the offending
//! input.

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, TodoId, TodoStatus, TodoTitle};

/// Machine-readable validation codes placed in error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidUuid,
    EmptyTitle,
    InvalidStatus,
    EmptyUpdate,
    MalformedBody,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidUuid => "invalid_uuid",
            Self::EmptyTitle => "empty_title",
            Self::InvalidStatus => "invalid_status",
            Self::EmptyUpdate => "empty_update",
            Self::MalformedBody => "malformed_body",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ValidationCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn field_value_error(
    field: FieldName,
    code: ValidationCode,
    message: impl Into<String>,
    value: &str,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
        "value": value,
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ValidationCode::MissingField,
        format!("missing required field: {name}"),
    )
}

/// Parse a path segment into a [`TodoId`].
pub(crate) fn parse_todo_id(value: &str) -> Result<TodoId, Error> {
    value.parse::<TodoId>().map_err(|_| {
        field_value_error(
            FieldName::new("id"),
            ValidationCode::InvalidUuid,
            "id must be a valid UUID",
            value,
        )
    })
}

/// Validate a supplied title.
pub(crate) fn parse_title(value: String, field: FieldName) -> Result<TodoTitle, Error> {
    TodoTitle::new(value)
        .map_err(|err| field_error(field, ValidationCode::EmptyTitle, err.to_string()))
}

/// Validate a supplied status against the board columns.
pub(crate) fn parse_status(value: &str, field: FieldName) -> Result<TodoStatus, Error> {
    value.parse::<TodoStatus>().map_err(|err| {
        field_value_error(field, ValidationCode::InvalidStatus, err.to_string(), value)
    })
}

/// Validate an optional title, treating absence as "unchanged".
pub(crate) fn parse_optional_title(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<TodoTitle>, Error> {
    value.map(|title| parse_title(title, field)).transpose()
}

/// Validate an optional status, treating absence as "unchanged".
pub(crate) fn parse_optional_status(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<TodoStatus>, Error> {
    value.map(|status| parse_status(status, field)).transpose()
}

pub(crate) fn empty_update_error() -> Error {
    Error::invalid_request("update must include a title or a status").with_details(json!({
        "code": ValidationCode::EmptyUpdate.as_str(),
    }))
}

/// `JsonConfig` error handler turning body decode failures into
/// `invalid_request` responses.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected malformed JSON body");
    let message = match &err {
        JsonPayloadError::ContentType => "request body must be application/json".to_owned(),
        other => format!("malformed JSON body: {other}"),
    };
    Error::invalid_request(message)
        .with_details(json!({ "code": ValidationCode::MalformedBody.as_str() }))
        .into()
}
