//! Domain primitives, services, and ports.
//!
//! Purpose: define the todo aggregate and the use-cases operating on it,
//! independent of HTTP and database concerns. Inbound adapters depend on the
//! driving ports in [`ports`]; outbound adapters implement the driven ones.
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic failure payload.
//! - Todo and its value types (TodoId, TodoTitle, TodoStatus, TodoPatch).
//! - TodoService: implementation of the todo command and query ports.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod todo;
pub mod todo_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::todo::{
    Todo, TodoDraft, TodoId, TodoPatch, TodoStatus, TodoTitle, TodoValidationError,
};
pub use self::todo_service::TodoService;
pub use self::trace_id::TraceId;
