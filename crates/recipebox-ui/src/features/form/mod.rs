//! Create/edit recipe form.
//!
//! # Design
//! - One state machine serves both modes; the mode decides labels and which
//!   request a submit sends.
//! - Edit mode only appends ingredients; the recipe name is read-only.
//! - Validation runs locally before any request is made.

pub mod actions;
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
