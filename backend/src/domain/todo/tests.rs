//! Unit coverage for todo value types.

use chrono::{Duration, Utc};
use rstest::rstest;

use super::*;

fn sample_todo() -> Todo {
    Todo::create(
        TodoId::random(),
        TodoDraft {
            title: TodoTitle::new("Buy milk").expect("valid title"),
            status: TodoStatus::Todo,
        },
        Utc::now(),
    )
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn title_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(TodoTitle::new(raw), Err(TodoValidationError::EmptyTitle));
}

#[rstest]
fn title_keeps_value_as_supplied() {
    let title = TodoTitle::new(" Buy milk ").expect("valid title");
    assert_eq!(title.as_ref(), " Buy milk ");
}

#[rstest]
#[case("TODO", TodoStatus::Todo)]
#[case("INPROGRESS", TodoStatus::InProgress)]
#[case("DONE", TodoStatus::Done)]
fn status_parses_wire_values(#[case] raw: &str, #[case] expected: TodoStatus) {
    assert_eq!(raw.parse::<TodoStatus>(), Ok(expected));
    assert_eq!(expected.as_str(), raw);
}

#[rstest]
#[case("todo")]
#[case("IN PROGRESS")]
#[case("ARCHIVED")]
fn status_rejects_unknown_values(#[case] raw: &str) {
    let err = raw.parse::<TodoStatus>().expect_err("unknown status");
    assert!(matches!(err, TodoValidationError::UnknownStatus { input } if input == raw));
}

#[rstest]
fn status_serialises_to_screaming_names() {
    let json = serde_json::to_string(&TodoStatus::InProgress).expect("serialise");
    assert_eq!(json, "\"INPROGRESS\"");
}

#[rstest]
fn id_rejects_non_uuid_values() {
    assert_eq!(
        "42".parse::<TodoId>(),
        Err(TodoValidationError::InvalidId)
    );
}

#[rstest]
fn empty_patch_is_rejected() {
    assert_eq!(
        TodoPatch::new(None, None),
        Err(TodoValidationError::EmptyPatch)
    );
}

#[rstest]
fn status_patch_leaves_title_unchanged() {
    let todo = sample_todo();
    let later = todo.created_at + Duration::seconds(5);

    let updated = todo.clone().apply(TodoPatch::status(TodoStatus::Done), later);

    assert_eq!(updated.status, TodoStatus::Done);
    assert_eq!(updated.title, todo.title);
    assert_eq!(updated.id, todo.id);
    assert_eq!(updated.updated_at, later);
    assert_eq!(updated.created_at, todo.created_at);
}

#[rstest]
fn title_patch_leaves_status_unchanged() {
    let todo = sample_todo();
    let title = TodoTitle::new("Buy oat milk").expect("valid title");

    let updated = todo.apply(TodoPatch::title(title.clone()), Utc::now());

    assert_eq!(updated.title, title);
    assert_eq!(updated.status, TodoStatus::Todo);
}

#[rstest]
fn apply_never_moves_updated_at_before_creation() {
    let todo = sample_todo();
    let earlier = todo.created_at - Duration::seconds(30);

    let updated = todo.clone().apply(TodoPatch::status(TodoStatus::Done), earlier);

    assert_eq!(updated.updated_at, todo.created_at);
}
