//! Todo REST routes.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::services::todo::{self, Todo, TodoError};
use crate::state::AppState;

/// Error half of every handler: status plus `{"error": ...}` body.
pub type ApiError = (StatusCode, Json<Value>);

pub(crate) fn todo_error_response(err: TodoError) -> ApiError {
    let (status, message) = match &err {
        TodoError::EmptyBody => (StatusCode::BAD_REQUEST, "Todo body cannot be empty"),
        TodoError::InvalidId(_) => (StatusCode::BAD_REQUEST, "Invalid todo ID"),
        TodoError::NotFound(_) => (StatusCode::NOT_FOUND, "Todo not found"),
        TodoError::Database(e) => {
            tracing::error!(error = %e, "todo store failure");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    };
    (status, Json(json!({ "error": message })))
}

/// Malformed or non-JSON request bodies keep the `{"error": ...}` shape.
pub(crate) fn json_rejection_response(rejection: JsonRejection) -> ApiError {
    (rejection.status(), Json(json!({ "error": rejection.body_text() })))
}

fn success() -> Json<Value> {
    Json(json!({ "success": true }))
}

#[derive(Deserialize)]
pub struct CreateTodoBody {
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub completed: bool,
}

/// `GET /api/todos` — list all todos.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = todo::list_todos(state.todos.as_ref())
        .await
        .map_err(todo_error_response)?;
    Ok(Json(todos))
}

/// `POST /api/todos` — create a todo.
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(body) = payload.map_err(json_rejection_response)?;
    let created = todo::create_todo(state.todos.as_ref(), &body.body, body.completed)
        .await
        .map_err(todo_error_response)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PATCH /api/todos/:id` — mark a todo completed.
pub async fn complete_todo(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    let id = todo::parse_todo_id(&id).map_err(todo_error_response)?;
    todo::complete_todo(state.todos.as_ref(), id)
        .await
        .map_err(todo_error_response)?;
    Ok(success())
}

/// `DELETE /api/todos/:id` — delete a todo.
pub async fn delete_todo(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    let id = todo::parse_todo_id(&id).map_err(todo_error_response)?;
    todo::delete_todo(state.todos.as_ref(), id)
        .await
        .map_err(todo_error_response)?;
    Ok(success())
}

#[cfg(test)]
#[path = "todos_test.rs"]
mod tests;
