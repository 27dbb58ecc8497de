//! Postgres-backed `TodoStore`.

use sqlx::PgPool;
use uuid::Uuid;

use crate::services::todo::{Todo, TodoError, TodoStore};

pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl TodoStore for PgTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, TodoError> {
        let rows = sqlx::query_as::<_, (Uuid, bool, String)>("SELECT id, completed, body FROM todos ORDER BY seq ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, completed, body)| Todo { id, completed, body })
            .collect())
    }

    async fn insert(&self, todo: &Todo) -> Result<(), TodoError> {
        sqlx::query("INSERT INTO todos (id, completed, body) VALUES ($1, $2, $3)")
            .bind(todo.id)
            .bind(todo.completed)
            .bind(&todo.body)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn mark_completed(&self, id: Uuid) -> Result<bool, TodoError> {
        let result = sqlx::query("UPDATE todos SET completed = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, TodoError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(all(test, feature = "live-db-tests"))]
#[path = "todo_store_test.rs"]
mod tests;
