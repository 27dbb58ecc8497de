//! Todo service: validation and CRUD over a `TodoStore`.
//!
//! DESIGN
//! ======
//! Route handlers parse requests and call into this module; storage is
//! reached only through the `TodoStore` trait so handlers and service logic
//! run unchanged against Postgres or an in-memory store.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("todo body cannot be empty")]
    EmptyBody,
    #[error("invalid todo id: {0}")]
    InvalidId(String),
    #[error("todo not found: {0}")]
    NotFound(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A todo item. Mirrors the `todos` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub completed: bool,
    pub body: String,
}

/// Persistence backend for todos.
#[async_trait::async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos in creation order.
    async fn list(&self) -> Result<Vec<Todo>, TodoError>;

    async fn insert(&self, todo: &Todo) -> Result<(), TodoError>;

    /// Set `completed = true`. Returns `false` if no todo has this id.
    async fn mark_completed(&self, id: Uuid) -> Result<bool, TodoError>;

    /// Returns `false` if no todo has this id.
    async fn delete(&self, id: Uuid) -> Result<bool, TodoError>;
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Parse a todo id taken from a request path.
///
/// # Errors
///
/// Returns `TodoError::InvalidId` if `raw` is not a UUID.
pub fn parse_todo_id(raw: &str) -> Result<Uuid, TodoError> {
    Uuid::parse_str(raw.trim()).map_err(|_| TodoError::InvalidId(raw.to_owned()))
}

/// List all todos.
///
/// # Errors
///
/// Returns a database error if the store fails.
pub async fn list_todos(store: &dyn TodoStore) -> Result<Vec<Todo>, TodoError> {
    store.list().await
}

/// Create a todo with a fresh id.
///
/// # Errors
///
/// Returns `TodoError::EmptyBody` for a blank body, or a database error.
pub async fn create_todo(store: &dyn TodoStore, body: &str, completed: bool) -> Result<Todo, TodoError> {
    if body.trim().is_empty() {
        return Err(TodoError::EmptyBody);
    }

    let todo = Todo { id: Uuid::new_v4(), completed, body: body.to_owned() };
    store.insert(&todo).await?;
    info!(todo_id = %todo.id, "todo created");
    Ok(todo)
}

/// Mark a todo as completed.
///
/// # Errors
///
/// Returns `TodoError::NotFound` if no todo has this id, or a database error.
pub async fn complete_todo(store: &dyn TodoStore, id: Uuid) -> Result<(), TodoError> {
    if !store.mark_completed(id).await? {
        return Err(TodoError::NotFound(id));
    }
    info!(todo_id = %id, "todo completed");
    Ok(())
}

/// Delete a todo.
///
/// # Errors
///
/// Returns `TodoError::NotFound` if no todo has this id, or a database error.
pub async fn delete_todo(store: &dyn TodoStore, id: Uuid) -> Result<(), TodoError> {
    if !store.delete(id).await? {
        return Err(TodoError::NotFound(id));
    }
    info!(todo_id = %id, "todo deleted");
    Ok(())
}

#[cfg(test)]
#[path = "todo_test.rs"]
mod tests;
