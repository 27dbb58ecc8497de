//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the todo store behind a trait object so tests can substitute an
//! in-memory implementation.

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::todo_store::PgTodoStore;
use crate::services::todo::TodoStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<dyn TodoStore>,
}

impl AppState {
    #[must_use]
    pub fn new(todos: Arc<dyn TodoStore>) -> Self {
        Self { todos }
    }

    /// State backed by Postgres.
    #[must_use]
    pub fn with_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(PgTodoStore::new(pool)))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
