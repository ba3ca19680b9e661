//! Builds the HTTP state from the configured storage backend.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use backend::domain::TodoService;
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryTodoRepository;
use backend::outbound::persistence::DieselTodoRepository;

use super::ServerConfig;

/// Wire the todo service to PostgreSQL when a pool is configured, otherwise
/// to process memory.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("todo store: postgres");
            let repository = Arc::new(DieselTodoRepository::new(pool.clone()));
            HttpState::from_service(Arc::new(TodoService::new(repository)))
        }
        None => {
            warn!("todo store: in-memory; records are lost on restart");
            let repository = Arc::new(InMemoryTodoRepository::new());
            HttpState::from_service(Arc::new(TodoService::new(repository)))
        }
    };
    web::Data::new(state)
}
