use sqlx::postgres::PgPoolOptions;

use super::*;
use crate::services::todo;

async fn live_store() -> PgTodoStore {
    let url = std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("TEST_DATABASE_URL or DATABASE_URL required for live-db-tests");
    let pool = PgPoolOptions::new().max_connections(2).connect(&url).await.expect("connect");
    sqlx::migrate!("src/db/migrations").run(&pool).await.expect("migrate");
    PgTodoStore::new(pool)
}

#[tokio::test]
async fn insert_complete_delete_round_trip() {
    let store = live_store().await;
    let created = todo::create_todo(&store, "live db todo", false).await.unwrap();

    let listed = store.list().await.unwrap();
    assert!(listed.iter().any(|t| t.id == created.id && !t.completed));

    assert!(store.mark_completed(created.id).await.unwrap());
    let listed = store.list().await.unwrap();
    assert!(listed.iter().any(|t| t.id == created.id && t.completed));

    assert!(store.delete(created.id).await.unwrap());
    assert!(!store.delete(created.id).await.unwrap());
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let store = live_store().await;
    let first = todo::create_todo(&store, "first", false).await.unwrap();
    let second = todo::create_todo(&store, "second", false).await.unwrap();

    let ids: Vec<Uuid> = store.list().await.unwrap().into_iter().map(|t| t.id).collect();
    let first_pos = ids.iter().position(|id| *id == first.id).unwrap();
    let second_pos = ids.iter().position(|id| *id == second.id).unwrap();
    assert!(first_pos < second_pos);

    store.delete(first.id).await.unwrap();
    store.delete(second.id).await.unwrap();
}

#[tokio::test]
async fn mark_completed_missing_id_reports_false() {
    let store = live_store().await;
    assert!(!store.mark_completed(Uuid::new_v4()).await.unwrap());
}
