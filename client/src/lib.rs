//! # client
//!
//! Leptos frontend for the todo board. Contains the application bootstrap
//! (mount point lookup and provider chain), the theme and query-cache
//! contexts, and the placeholder panel.
//!
//! Built with `ssr` for server rendering and `hydrate` for the WASM bundle.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod query;
pub mod theme;
pub mod util;
