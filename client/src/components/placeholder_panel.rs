//! Placeholder panel: a padded box with fixed text.
//!
//! The background depends only on the color mode passed in by the caller.

#[cfg(test)]
#[path = "placeholder_panel_test.rs"]
mod placeholder_panel_test;

use leptos::prelude::*;

use crate::theme::{ColorMode, resolve_color, resolve_space};

pub const PANEL_TEXT: &str = "Hello Chakra";

/// Uniform padding, as a spacing-scale step.
pub const PANEL_PADDING: u8 = 4;

pub const LIGHT_BACKGROUND: &str = "white";
pub const DARK_BACKGROUND: &str = "gray.900";

/// Resolved presentation of the panel for one color mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelStyle {
    pub background: &'static str,
    pub padding: u8,
}

impl PanelStyle {
    /// Inline CSS for the container.
    pub fn css(&self) -> String {
        let background = resolve_color(self.background).unwrap_or(self.background);
        format!("padding: {}; background-color: {background};", resolve_space(self.padding))
    }
}

pub fn panel_style(mode: ColorMode) -> PanelStyle {
    PanelStyle { background: mode.value(LIGHT_BACKGROUND, DARK_BACKGROUND), padding: PANEL_PADDING }
}

/// Padded container showing [`PANEL_TEXT`].
#[component]
pub fn PlaceholderPanel(#[prop(into)] color_mode: Signal<ColorMode>) -> impl IntoView {
    let current = move || panel_style(color_mode.get());

    view! {
        <div
            class="placeholder-panel"
            data-bg=move || current().background
            style=move || current().css()
        >
            {PANEL_TEXT}
        </div>
    }
}
