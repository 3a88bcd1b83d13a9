//! User link table feature: search toolbar, filter panel and table.
//!
//! # Design
//! - Pure state, actions and logic compile on every target for native tests.
//! - Views and the fetch effect are wasm-only.
//! - API calls stay inside this feature layer.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
#[cfg(target_arch = "wasm32")]
pub(crate) mod effects;
pub mod logic;
pub mod state;
pub mod submitter;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
