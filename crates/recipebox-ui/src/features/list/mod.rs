//! Recipe list page.
//!
//! # Design
//! - Fetch once per mount; a failed load offers a full page reload as retry.
//! - Rows link to detail pages by identifier.

pub mod actions;
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
