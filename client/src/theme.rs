//! Theme context: color mode and design tokens.
//!
//! DESIGN
//! ======
//! The color mode is an explicit value carried by `ThemeConfig` and exposed to
//! descendants through `ThemeContext`. Components that depend on it take the
//! mode as a parameter instead of reading browser state themselves.
//!
//! Only the default token set is supported. There is no theme customization
//! layer.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::util::color_mode;

// =============================================================================
// COLOR MODE
// =============================================================================

/// Two-valued color mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Pick `light` or `dark` depending on the mode.
    pub fn value<T>(self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored mode name. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

// =============================================================================
// TOKENS
// =============================================================================

/// Base of the spacing scale: step `n` is `n * 0.25rem`.
const SPACE_UNIT_REM: f32 = 0.25;

/// Resolve a color token (`white`, `gray.50` .. `gray.900`) to a CSS color.
#[must_use]
pub fn resolve_color(token: &str) -> Option<&'static str> {
    let value = match token {
        "white" => "#FFFFFF",
        "black" => "#000000",
        "gray.50" => "#F7FAFC",
        "gray.100" => "#EDF2F7",
        "gray.200" => "#E2E8F0",
        "gray.300" => "#CBD5E0",
        "gray.400" => "#A0AEC0",
        "gray.500" => "#718096",
        "gray.600" => "#4A5568",
        "gray.700" => "#2D3748",
        "gray.800" => "#1A202C",
        "gray.900" => "#171923",
        _ => return None,
    };
    Some(value)
}

/// Resolve a spacing step to a CSS length.
#[must_use]
pub fn resolve_space(step: u8) -> String {
    if step == 0 {
        return "0".to_owned();
    }
    format!("{}rem", f32::from(step) * SPACE_UNIT_REM)
}

// =============================================================================
// CONTEXT
// =============================================================================

/// Theme layer of the provider chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeConfig {
    pub initial_color_mode: ColorMode,
}

/// Value provided to descendants of `ThemeProvider`.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub color_mode: RwSignal<ColorMode>,
}

/// Install a theme context for the current owner and return it.
pub fn provide_theme(config: ThemeConfig) -> ThemeContext {
    let ctx = ThemeContext { color_mode: RwSignal::new(config.initial_color_mode) };
    provide_context(ctx);
    ctx
}

/// Read the color mode installed by the nearest `ThemeProvider`.
///
/// # Panics
///
/// Panics if called outside a `ThemeProvider`.
pub fn use_color_mode() -> Signal<ColorMode> {
    expect_context::<ThemeContext>().color_mode.into()
}

/// Theme-context provider.
///
/// Server rendering always uses the configured initial mode. Once hydrated,
/// a stored browser preference replaces it; without one the configured mode
/// stays.
#[component]
pub fn ThemeProvider(#[prop(optional)] theme: ThemeConfig, children: Children) -> impl IntoView {
    let ctx = provide_theme(theme);
    let fallback = theme.initial_color_mode;

    Effect::new(move |_| {
        let stored = color_mode::read_preference(fallback);
        color_mode::apply(stored);
        ctx.color_mode.set(stored);
    });

    children()
}
