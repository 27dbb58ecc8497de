//! Color mode persistence in the browser.
//!
//! Reads the stored preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths return the
//! caller's fallback mode so server rendering stays deterministic.

#[cfg(test)]
#[path = "color_mode_test.rs"]
mod color_mode_test;

use crate::theme::ColorMode;

/// `localStorage` key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "chakra-ui-color-mode";

/// Interpret a raw stored value. Missing or unknown values yield `fallback`.
pub fn mode_from_stored(raw: Option<&str>, fallback: ColorMode) -> ColorMode {
    raw.and_then(ColorMode::parse).unwrap_or(fallback)
}

/// Read the color mode preference from localStorage.
///
/// Returns `fallback` when nothing usable is stored or outside a browser.
pub fn read_preference(fallback: ColorMode) -> ColorMode {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        mode_from_stored(stored.as_deref(), fallback)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        fallback
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(mode: ColorMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", mode.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
