//! Scoped element identifiers for label/input pairing.
//!
//! # Design
//! - One scope per app root, handed down through context; no process-wide counter.
//! - Identifiers are stable for a component instance once drawn.

use std::cell::Cell;
use std::rc::Rc;

/// Prefix used by the app-level scope.
pub const DEFAULT_ID_PREFIX: &str = "recipebox";

/// Monotonic identifier source. Clones share the same counter.
#[derive(Clone, Debug)]
pub struct IdScope {
    prefix: Rc<str>,
    next: Rc<Cell<u32>>,
}

impl IdScope {
    /// Create a scope producing `"{prefix}-{n}"` starting at 1.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: Rc::from(prefix),
            next: Rc::new(Cell::new(1)),
        }
    }

    /// Draw the next identifier.
    #[must_use]
    pub fn next_id(&self) -> String {
        let value = self.next.get();
        self.next.set(value.wrapping_add(1));
        format!("{}-{value}", self.prefix)
    }
}

impl Default for IdScope {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX)
    }
}

impl PartialEq for IdScope {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.next, &other.next)
    }
}
