//! Application bootstrap: mount point lookup and the provider chain.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders `render_root` into `<div id="root">`; the browser entry
//! point locates that element and hydrates the same tree into it. A missing
//! mount point is fatal.
//!
//! DESIGN
//! ======
//! Providers are described by `ProviderChain`, one field per layer. The cache
//! layer is installed before the theme layer so anything under the theme can
//! already reach the cache.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use leptos::prelude::*;

use crate::app::App;
use crate::query::{QueryClient, QueryClientProvider};
use crate::theme::{ThemeConfig, ThemeProvider};

/// Element id of the mount point in the host document.
pub const MOUNT_POINT_ID: &str = "root";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("mount point #{0} not found in document")]
    MissingMountPoint(&'static str),
}

/// Source of mount elements. Implemented by the browser document.
pub trait MountHost {
    type Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

/// Find the designated mount element.
///
/// # Errors
///
/// Returns `BootstrapError::MissingMountPoint` if the host has no element
/// with id [`MOUNT_POINT_ID`].
pub fn locate_mount<H: MountHost>(host: &H) -> Result<H::Element, BootstrapError> {
    host.element_by_id(MOUNT_POINT_ID)
        .ok_or(BootstrapError::MissingMountPoint(MOUNT_POINT_ID))
}

/// Layers wrapped around the app, outermost first.
#[derive(Clone, Default)]
pub struct ProviderChain {
    pub cache: QueryClient,
    pub theme: ThemeConfig,
}

/// Render the app inside its providers.
pub fn render_root(chain: ProviderChain) -> impl IntoView {
    let ProviderChain { cache, theme } = chain;

    view! {
        <QueryClientProvider client=cache>
            <ThemeProvider theme=theme>
                <App/>
            </ThemeProvider>
        </QueryClientProvider>
    }
}

#[cfg(feature = "hydrate")]
impl MountHost for web_sys::Document {
    type Element = web_sys::HtmlElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element> {
        use wasm_bindgen::JsCast;

        self.get_element_by_id(id)?.dyn_into::<web_sys::HtmlElement>().ok()
    }
}

/// Browser entry point, invoked by the hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        wasm_bindgen::throw_str("no document available");
    };
    let root = match locate_mount(&document) {
        Ok(root) => root,
        Err(e) => wasm_bindgen::throw_str(&e.to_string()),
    };

    log::debug!("hydrating into #{MOUNT_POINT_ID}");
    leptos::mount::hydrate_from(root, || render_root(ProviderChain::default())).forget();
}
