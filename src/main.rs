mod config;
mod db;
mod routes;
mod services;
mod state;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "loaded env file"),
        Err(e) if e.not_found() => tracing::debug!("no .env file; using process environment"),
        Err(e) => tracing::warn!(error = %e, "failed to load .env file"),
    }

    let config = config::ServerConfig::from_env().expect("invalid configuration");

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");
    tracing::info!("connected to database");

    let leptos_options = get_configuration(None)
        .expect("leptos configuration")
        .leptos_options;

    let state = state::AppState::with_pool(pool);
    let app = routes::app(state, leptos_options);
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "todoboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
