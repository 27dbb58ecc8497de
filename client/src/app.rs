//! Application entry component and the server-rendered document shell.

use leptos::prelude::*;

use crate::bootstrap::{MOUNT_POINT_ID, ProviderChain, render_root};
use crate::components::placeholder_panel::PlaceholderPanel;
use crate::theme::use_color_mode;

pub const DOCUMENT_TITLE: &str = "Todo Board";

/// HTML shell rendered on the server for SSR + hydration.
///
/// The provider tree is rendered into the mount point with default layers,
/// matching what the browser entry point hydrates.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{DOCUMENT_TITLE}</title>
                <HydrationScripts options/>
            </head>
            <body>
                <div id=MOUNT_POINT_ID>{render_root(ProviderChain::default())}</div>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Reads the color mode from the theme context and hands it to the panel.
#[component]
pub fn App() -> impl IntoView {
    let color_mode = use_color_mode();

    view! { <PlaceholderPanel color_mode=color_mode/> }
}
