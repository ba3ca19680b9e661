//! Three-column board client for the todo backend.
//!
//! The crate keeps board state in an explicit [`BoardStore`], talks to the
//! server through the [`TodoApi`] port and renders the board as text.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use board_client::{BoardStore, HttpTodoApi, render_board};
//! use reqwest::Url;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let base = Url::parse("http://localhost:3001")?;
//! let api = HttpTodoApi::new(&base, Duration::from_secs(10))?;
//! let mut store = BoardStore::new(Arc::new(api));
//! store.load().await?;
//! store.set_create_input("Buy milk");
//! store.create().await?;
//! print!("{}", render_board(&store));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod http;
pub mod render;
pub mod store;
pub mod todo;

pub use api::{TodoApi, TodoApiError};
pub use config::BoardSettings;
pub use http::HttpTodoApi;
pub use render::{Column, columns, render_board};
pub use store::{BoardError, BoardStore, EditState};
pub use todo::{CreateTodo, Todo, TodoStatus, UpdateTodo};
