//! Recipe detail page.
//!
//! # Design
//! - Reload whenever the route identifier changes; a stale response never lands.
//! - Deletion asks for confirmation, needs the author name, and only leaves
//!   the page after the server answered.

pub mod actions;
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
