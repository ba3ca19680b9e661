//! Command-line surface for the board.
//!
//! Each invocation loads the board once, applies at most one command and
//! leaves rendering to the caller. `board show <id>` skips the full load and
//! fetches only that todo, so the rendered board holds just that card.

use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::store::{BoardError, BoardStore};
use crate::todo::TodoStatus;

/// `board` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "board", about = "Show and edit the todo board", version)]
pub struct Cli {
    /// Base URL of the todo backend. Overrides `BOARD_API_URL`.
    #[arg(long = "api-url", value_name = "url", global = true)]
    pub api_url: Option<String>,
    /// Action to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// Board actions.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the board, or a single todo when `id` is given.
    Show {
        /// Todo to fetch on its own.
        id: Option<Uuid>,
    },
    /// Create a todo in the TODO column.
    Add {
        /// Title of the new todo.
        title: String,
    },
    /// Rename a todo.
    Edit {
        /// Todo to rename.
        id: Uuid,
        /// New title.
        title: String,
    },
    /// Move a todo to another column.
    Move {
        /// Todo to move.
        id: Uuid,
        /// Target column: TODO, INPROGRESS or DONE.
        status: TodoStatus,
    },
    /// Delete a todo.
    Delete {
        /// Todo to delete.
        id: Uuid,
    },
}

/// Load the board and apply `command` to it.
///
/// # Errors
///
/// Returns the first [`BoardError`] raised; it is also recorded on `store`
/// so the rendered board shows it.
pub async fn execute(command: &Command, store: &mut BoardStore) -> Result<(), BoardError> {
    if let Command::Show { id: Some(id) } = command {
        return store.refresh(*id).await.map(drop);
    }
    store.load().await?;
    match command {
        Command::Show { .. } => Ok(()),
        Command::Add { title } => {
            store.set_create_input(title.as_str());
            store.create().await.map(drop)
        }
        Command::Edit { id, title } => {
            store.begin_edit(*id)?;
            store.set_edit_title(title.as_str())?;
            store.commit_edit().await
        }
        Command::Move { id, status } => store.set_status(*id, *status).await,
        Command::Delete { id } => store.delete(*id).await,
    }
}
