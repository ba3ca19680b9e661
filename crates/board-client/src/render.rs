//! Text rendering of the board.

use crate::store::{BoardError, BoardStore};
use crate::todo::{Todo, TodoStatus};

/// One board column with its cards in board order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<'a> {
    /// Status the column collects.
    pub status: TodoStatus,
    /// Cards in the column.
    pub todos: Vec<&'a Todo>,
}

/// Partition `todos` into the `TODO`, `INPROGRESS` and `DONE` columns,
/// preserving order within each column.
#[must_use]
pub fn columns(todos: &[Todo]) -> [Column<'_>; 3] {
    TodoStatus::ALL.map(|status| Column {
        status,
        todos: todos.iter().filter(|todo| todo.status == status).collect(),
    })
}

/// Render the board as plain text, one section per column, preceded by an
/// error banner when the last operation failed.
#[must_use]
pub fn render_board(store: &BoardStore) -> String {
    render_todos(store.todos(), store.last_error())
}

/// Render an arbitrary collection with an optional error banner.
#[must_use]
pub fn render_todos(todos: &[Todo], last_error: Option<&BoardError>) -> String {
    let mut out = String::new();
    if let Some(err) = last_error {
        out.push_str(&format!("! {err}\n\n"));
    }
    for (index, column) in columns(todos).iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{} ({})\n", column.status, column.todos.len()));
        if column.todos.is_empty() {
            out.push_str("  (empty)\n");
        }
        for todo in &column.todos {
            out.push_str(&format!("  - {} [{}]\n", todo.title, todo.id));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use uuid::Uuid;

    use super::*;
    use crate::api::TodoApiError;

    fn todo(title: &str, status: TodoStatus) -> Todo {
        Todo {
            id: Uuid::new_v4(),
            title: title.to_owned(),
            status,
        }
    }

    #[rstest]
    fn columns_partition_by_status_in_fixed_order() {
        let todos = vec![
            todo("a", TodoStatus::Done),
            todo("b", TodoStatus::Todo),
            todo("c", TodoStatus::Done),
        ];

        let [todo_col, in_progress, done] = columns(&todos);

        assert_eq!(todo_col.status, TodoStatus::Todo);
        assert_eq!(todo_col.todos, vec![&todos[1]]);
        assert!(in_progress.todos.is_empty());
        assert_eq!(done.todos, vec![&todos[0], &todos[2]]);
    }

    #[rstest]
    fn renders_cards_with_title_and_id() {
        let milk = todo("Buy milk", TodoStatus::Todo);
        let text = render_todos(std::slice::from_ref(&milk), None);

        assert!(text.starts_with("TODO (1)\n"));
        assert!(text.contains(&format!("  - Buy milk [{}]", milk.id)));
        assert!(text.contains("INPROGRESS (0)\n  (empty)\n"));
        assert!(!text.contains('!'));
    }

    #[rstest]
    fn renders_error_banner_first() {
        let err = BoardError::Api(TodoApiError::transport("connection refused"));
        let text = render_todos(&[], Some(&err));

        assert!(text.starts_with("! todo request failed: connection refused\n"));
    }
}
