//! Feature slices.

pub mod links;
