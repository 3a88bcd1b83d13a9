//! Core, DOM-free primitives and helpers for the dashboard.
pub mod breakpoints;
pub mod config;
pub mod debounce;
pub mod errors;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;
