//! Failure reporting for page loaders.
//!
//! # Design
//! - The browser has no tracing subscriber, so failures go to the devtools console there.
//! - Native builds (tests, tooling) keep `tracing` so failures stay visible under a subscriber.

use std::fmt::Display;

/// One-line description of a failed operation.
#[must_use]
pub fn failure_line(operation: &str, error: &impl Display) -> String {
    format!("{operation} failed: {error}")
}

/// Report a failed operation where the current target can see it.
pub fn report_failure(operation: &str, error: &impl Display) {
    let line = failure_line(operation, error);
    #[cfg(target_arch = "wasm32")]
    gloo::console::error!(line);
    #[cfg(not(target_arch = "wasm32"))]
    tracing::warn!("{line}");
}
