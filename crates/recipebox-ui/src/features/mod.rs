//! Feature slices: one per page.
//!
//! Each slice splits into `actions` (user intent), `state` (pure reducer),
//! `api` (async orchestration over the recipe client) and a wasm-only `view`.

pub mod detail;
pub mod form;
pub mod list;
