//! Todo board backend.
//!
//! Hexagonal layout: [`domain`] holds the todo aggregate, its service and
//! ports; [`inbound`] exposes them over HTTP; [`outbound`] stores them in
//! PostgreSQL or in memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
