//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the todo REST API and the server-rendered UI shell under
//! a single Axum router. Compiled client assets are served from `/pkg`.

pub mod shell;
pub mod todos;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, patch};
use leptos::prelude::LeptosOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/todos", get(todos::list_todos).post(todos::create_todo))
        .route("/api/todos/{id}", patch(todos::complete_todo).delete(todos::delete_todo))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes + UI shell at `/` + static assets at `/pkg`.
pub fn app(state: AppState, leptos_options: LeptosOptions) -> Router {
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let shell_router = Router::new()
        .route("/", get(shell::index))
        .with_state(leptos_options);

    api_routes(state)
        .merge(shell_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
