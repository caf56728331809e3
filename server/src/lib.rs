//! In-memory todo REST service.
//!
//! # Overview
//! Five routes over a single in-memory collection: list, create, get by id,
//! partial update by id, delete by id. State lives only in process memory
//! and is lost on restart.
//!
//! # Design
//! - The store is constructed once from a collaborator-supplied seed and
//!   handed to handlers as shared state, never read from an ambient global.
//! - axum handles requests concurrently, so the store sits behind a
//!   `tokio::sync::RwLock`; each operation holds the lock for its full
//!   read-modify-write and completes synchronously under it.
//! - Path ids arrive as raw strings and are parsed strictly. GET and PATCH
//!   answer 400 on a non-integer id; DELETE treats one as unmatched and
//!   answers the same 404 as a missing record.

pub mod error;
pub mod store;
pub mod types;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use store::TodoStore;
pub use types::{CreateTodo, Todo, UpdateTodo};

/// Shared handle to the process-wide store.
pub type Db = Arc<RwLock<TodoStore>>;

/// Build the router over a collaborator-supplied seed list.
pub fn app(seed: Vec<Todo>) -> Router {
    let db: Db = Arc::new(RwLock::new(TodoStore::with_seed(seed)));
    Router::new()
        .route("/todo", get(list_todos).post(create_todo))
        .route(
            "/todo/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .with_state(db)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener, seed: Vec<Todo>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(seed)).await
}

/// Strict integer parse for path ids. Prefix matching in the style of
/// `parseInt` ("12abc", "1.5") is deliberately not supported.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId)
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.list())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = db.write().await.create(input);
    tracing::debug!(id = todo.id, "todo created");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    db.read().await.get(id).map(Json).ok_or(ApiError::NotFound)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    db.write()
        .await
        .update(id, patch)
        .map(Json)
        .ok_or(ApiError::TodoNotFound)
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    // No invalid-id surface here: an unparseable id matches no record and
    // falls through to the same 404 as a missing one.
    let deleted = match parse_id(&id) {
        Ok(id) => db.write().await.delete(id),
        Err(_) => false,
    };
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::TodoNotFound)
    }
}
