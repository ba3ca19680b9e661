//! Behaviour tests for the todo board endpoints.
//!
//! Scenarios drive the real handlers and service over the in-memory
//! repository. Actix uses `spawn_local`, so requests run inside a `LocalSet`
//! on a current-thread runtime owned by the world.

use std::cell::RefCell;
use std::sync::Arc;

use actix_web::test::{self as actix_test, TestRequest};
use actix_web::{App, web};
use backend::Trace;
use backend::domain::TodoService;
use backend::inbound::http::state::HttpState;
use backend::inbound::http::todos;
use backend::outbound::memory::InMemoryTodoRepository;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

struct TodoBoardWorld {
    runtime: Runtime,
    local: LocalSet,
    state: RefCell<web::Data<HttpState>>,
    last_status: RefCell<Option<u16>>,
    last_body: RefCell<Option<Value>>,
    stored_id: RefCell<Option<String>>,
}

fn in_memory_state() -> web::Data<HttpState> {
    let service = Arc::new(TodoService::new(Arc::new(InMemoryTodoRepository::new())));
    web::Data::new(HttpState::from_service(service))
}

impl TodoBoardWorld {
    fn new() -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime should build");
        Self {
            runtime,
            local: LocalSet::new(),
            state: RefCell::new(in_memory_state()),
            last_status: RefCell::new(None),
            last_body: RefCell::new(None),
            stored_id: RefCell::new(None),
        }
    }

    fn reset(&self) {
        *self.state.borrow_mut() = in_memory_state();
        *self.last_status.borrow_mut() = None;
        *self.last_body.borrow_mut() = None;
        *self.stored_id.borrow_mut() = None;
    }

    fn send(&self, request: TestRequest) -> (u16, Value) {
        let state = self.state.borrow().clone();
        self.local.block_on(&self.runtime, async move {
            let app = actix_test::init_service(
                App::new()
                    .app_data(state)
                    .wrap(Trace)
                    .configure(todos::configure),
            )
            .await;
            let response = actix_test::call_service(&app, request.to_request()).await;
            let status = response.status().as_u16();
            let bytes = actix_test::read_body(response).await;
            let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            (status, body)
        })
    }

    fn record(&self, request: TestRequest) {
        let (status, body) = self.send(request);
        *self.last_status.borrow_mut() = Some(status);
        *self.last_body.borrow_mut() = Some(body);
    }

    fn listed(&self) -> Vec<Value> {
        let (status, body) = self.send(TestRequest::get().uri("/v1/todo"));
        assert_eq!(status, 200, "list should succeed");
        body.as_array().cloned().expect("list body is an array")
    }

    fn stored_id(&self) -> String {
        self.stored_id.borrow().clone().expect("a todo was stored")
    }
}

#[fixture]
fn world() -> TodoBoardWorld {
    TodoBoardWorld::new()
}

#[given("an empty todo store")]
fn an_empty_todo_store(world: &TodoBoardWorld) {
    world.reset();
}

#[given("a stored todo titled \"{title}\"")]
fn a_stored_todo_titled(world: &TodoBoardWorld, title: String) {
    let (status, body) = world.send(
        TestRequest::post()
            .uri("/v1/todo")
            .set_json(json!({"title": title, "status": "TODO"})),
    );
    assert_eq!(status, 201, "seed todo should be created");
    let id = body
        .get("id")
        .and_then(Value::as_str)
        .expect("created todo id")
        .to_owned();
    *world.stored_id.borrow_mut() = Some(id);
}

#[when("the client creates a todo titled \"{title}\" with status {status}")]
fn the_client_creates_a_todo(world: &TodoBoardWorld, title: String, status: String) {
    world.record(
        TestRequest::post()
            .uri("/v1/todo")
            .set_json(json!({"title": title, "status": status})),
    );
}

#[when("the client moves the stored todo to {status}")]
fn the_client_moves_the_stored_todo(world: &TodoBoardWorld, status: String) {
    let id = world.stored_id();
    world.record(
        TestRequest::patch()
            .uri(&format!("/v1/todo/{id}"))
            .set_json(json!({"status": status})),
    );
}

#[when("the client deletes todo {id}")]
fn the_client_deletes_todo(world: &TodoBoardWorld, id: String) {
    world.record(TestRequest::delete().uri(&format!("/v1/todo/{id}")));
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &TodoBoardWorld, status: u16) {
    assert_eq!(*world.last_status.borrow(), Some(status));
}

#[then("the error code is {code}")]
fn the_error_code_is(world: &TodoBoardWorld, code: String) {
    let body = world.last_body.borrow();
    let body = body.as_ref().expect("response body");
    assert_eq!(body.get("code").and_then(Value::as_str), Some(code.as_str()));
}

#[then("the list contains {count} todo")]
fn the_list_contains(world: &TodoBoardWorld, count: usize) {
    assert_eq!(world.listed().len(), count);
}

#[then("the listed todo has status {status}")]
fn the_listed_todo_has_status(world: &TodoBoardWorld, status: String) {
    let listed = world.listed();
    let first = listed.first().expect("one listed todo");
    assert_eq!(
        first.get("status").and_then(Value::as_str),
        Some(status.as_str())
    );
}

#[scenario(
    path = "tests/features/todo_board.feature",
    name = "Creating a todo adds it to the list"
)]
fn creating_a_todo_adds_it_to_the_list(world: TodoBoardWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/todo_board.feature",
    name = "Moving a todo to another column"
)]
fn moving_a_todo_to_another_column(world: TodoBoardWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/todo_board.feature",
    name = "Rejecting a blank title persists nothing"
)]
fn rejecting_a_blank_title_persists_nothing(world: TodoBoardWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/todo_board.feature",
    name = "Deleting an unknown todo"
)]
fn deleting_an_unknown_todo(world: TodoBoardWorld) {
    drop(world);
}
