//! In-memory stand-in for the remote users/todos service.
//!
//! Mirrors the public playground API closely enough for the client to be
//! exercised end to end: users embed their todos, todo ids are sequential
//! integers, and todos stay in insertion order.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub label: String,
    pub is_done: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserView {
    pub name: String,
    pub id: u64,
    pub todos: Vec<Todo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserCreated {
    pub name: String,
    pub id: u64,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub label: String,
    #[serde(default)]
    pub is_done: bool,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub label: Option<String>,
    pub is_done: Option<bool>,
}

#[derive(Debug)]
struct UserRecord {
    id: u64,
    todos: Vec<Todo>,
}

/// Everything the service knows.
#[derive(Debug, Default)]
pub struct Store {
    next_user_id: u64,
    next_todo_id: u64,
    users: HashMap<String, UserRecord>,
}

impl Store {
    /// Todos of `name` in stored order, if the user exists.
    pub fn todos(&self, name: &str) -> Option<&[Todo]> {
        self.users.get(name).map(|user| user.todos.as_slice())
    }

    fn todo_mut(&mut self, id: u64) -> Option<&mut Todo> {
        self.users
            .values_mut()
            .flat_map(|user| user.todos.iter_mut())
            .find(|todo| todo.id == id)
    }

    fn remove_todo(&mut self, id: u64) -> bool {
        for user in self.users.values_mut() {
            if let Some(index) = user.todos.iter().position(|todo| todo.id == id) {
                user.todos.remove(index);
                return true;
            }
        }
        false
    }
}

pub type Db = Arc<RwLock<Store>>;

/// `RUST_LOG` fallback for the standalone binary.
pub const DEFAULT_LOG_FILTER: &str = "mock_server=info";

type ApiError = (StatusCode, Json<Value>);

fn detail(status: StatusCode, message: String) -> ApiError {
    (status, Json(json!({ "detail": message })))
}

pub fn app() -> Router {
    app_with_store(Db::default())
}

/// Build the router over an existing store so callers can inspect it.
pub fn app_with_store(db: Db) -> Router {
    Router::new()
        .route("/users/{name}", get(get_user).post(create_user))
        .route(
            "/todos/{key}",
            post(create_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_user(
    State(db): State<Db>,
    Path(name): Path<String>,
) -> Result<Json<UserView>, ApiError> {
    let store = db.read().await;
    let user = store
        .users
        .get(&name)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, format!("User {name} doesn't exist.")))?;
    Ok(Json(UserView {
        name,
        id: user.id,
        todos: user.todos.clone(),
    }))
}

async fn create_user(
    State(db): State<Db>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<UserCreated>), ApiError> {
    let mut store = db.write().await;
    if store.users.contains_key(&name) {
        return Err(detail(
            StatusCode::BAD_REQUEST,
            format!("User {name} already exists."),
        ));
    }
    store.next_user_id += 1;
    let id = store.next_user_id;
    store.users.insert(
        name.clone(),
        UserRecord {
            id,
            todos: Vec::new(),
        },
    );
    info!(%name, id, "created user");
    Ok((StatusCode::CREATED, Json(UserCreated { name, id })))
}

async fn create_todo(
    State(db): State<Db>,
    Path(name): Path<String>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let mut store = db.write().await;
    if !store.users.contains_key(&name) {
        return Err(detail(
            StatusCode::NOT_FOUND,
            format!("User {name} doesn't exist."),
        ));
    }
    store.next_todo_id += 1;
    let todo = Todo {
        id: store.next_todo_id,
        label: input.label,
        is_done: input.is_done,
    };
    if let Some(user) = store.users.get_mut(&name) {
        user.todos.push(todo.clone());
    }
    info!(%name, id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    let mut store = db.write().await;
    let todo = store
        .todo_mut(id)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, format!("Todo #{id} doesn't exist.")))?;
    if let Some(label) = input.label {
        todo.label = label;
    }
    if let Some(is_done) = input.is_done {
        todo.is_done = is_done;
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, ApiError> {
    let mut store = db.write().await;
    if store.remove_todo(id) {
        info!(id, "deleted todo");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(detail(
            StatusCode::NOT_FOUND,
            format!("Todo #{id} doesn't exist."),
        ))
    }
}
