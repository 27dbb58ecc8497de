//! Server-rendered HTML document for the client app.

use axum::extract::State;
use axum::response::Html;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// `GET /` — render the document shell with the app in its mount point.
pub async fn index(State(options): State<LeptosOptions>) -> Html<String> {
    Html(render_document(options))
}

/// Render the shell to a complete HTML string.
pub fn render_document(options: LeptosOptions) -> String {
    Owner::new().with(|| client::app::shell(options).to_html())
}

#[cfg(test)]
#[path = "shell_test.rs"]
mod tests;
