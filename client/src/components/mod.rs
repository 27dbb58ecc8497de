//! Presentational components.

pub mod placeholder_panel;
