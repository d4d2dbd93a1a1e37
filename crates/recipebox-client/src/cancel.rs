//! Explicit cancellation for in-flight requests.
//!
//! # Design
//! - One token per view mount (or per identifier); cancel it when the view goes away.
//! - Transports register abort hooks so the underlying request is torn down, not just ignored.
//! - Single-threaded by construction: the UI runs on one event loop.

use std::cell::{Cell, RefCell};
use std::fmt::{self, Debug, Formatter};
use std::future::Future;
use std::rc::Rc;

use futures_util::future::{AbortHandle, Abortable};

/// Marker returned when a guarded future was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

type AbortHook = Box<dyn FnOnce()>;

#[derive(Default)]
struct Inner {
    cancelled: Cell<bool>,
    next_handle: Cell<u64>,
    handles: RefCell<Vec<(u64, AbortHandle)>>,
    hooks: RefCell<Vec<AbortHook>>,
}

/// Removes a guard's abort handle once its future finishes or is dropped.
struct HandleSlot<'a> {
    inner: &'a Inner,
    key: u64,
}

impl Drop for HandleSlot<'_> {
    fn drop(&mut self) {
        self.inner
            .handles
            .borrow_mut()
            .retain(|(key, _)| *key != self.key);
    }
}

/// Shared cancellation flag with abort hooks. Clones observe the same state.
#[derive(Clone, Default)]
pub struct CancelToken {
    inner: Rc<Inner>,
}

impl CancelToken {
    /// Create a live token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel every guarded future and run registered abort hooks. Idempotent.
    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        let handles = self.inner.handles.take();
        for (_, handle) in handles {
            handle.abort();
        }
        let hooks = self.inner.hooks.take();
        for hook in hooks {
            hook();
        }
    }

    /// Whether [`CancelToken::cancel`] has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    /// Run `hook` when the token is cancelled, or immediately if it already is.
    pub fn on_cancel(&self, hook: impl FnOnce() + 'static) {
        if self.is_cancelled() {
            hook();
            return;
        }
        self.inner.hooks.borrow_mut().push(Box::new(hook));
    }

    /// Drive `future` to completion unless the token is cancelled first.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] if the token is cancelled before or while the future runs.
    pub async fn guard<F: Future>(&self, future: F) -> Result<F::Output, Cancelled> {
        if self.is_cancelled() {
            return Err(Cancelled);
        }
        let (handle, registration) = AbortHandle::new_pair();
        let key = self.inner.next_handle.get();
        self.inner.next_handle.set(key.wrapping_add(1));
        self.inner.handles.borrow_mut().push((key, handle));
        let _slot = HandleSlot {
            inner: &self.inner,
            key,
        };
        Abortable::new(future, registration)
            .await
            .map_err(|_| Cancelled)
    }
}

impl Debug for CancelToken {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CancelToken")
            .field("cancelled", &self.is_cancelled())
            .finish_non_exhaustive()
    }
}
