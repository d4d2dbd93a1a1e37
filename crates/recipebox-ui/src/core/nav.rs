//! Side-effect seams for navigation and confirmation prompts.
//!
//! # Design
//! - Page orchestration talks to these traits, never to the browser directly.
//! - Browser implementations live in the app shell; tests record calls.

use crate::core::routes::AppRoute;

/// Moves the user between pages.
pub trait Navigator {
    /// Navigate to `route`, adding a history entry.
    fn push(&self, route: AppRoute);
    /// Go back one history entry.
    fn back(&self);
    /// Reload the current page.
    fn reload(&self);
}

/// Asks the user a yes/no question.
pub trait Confirm {
    /// `true` when the user accepts.
    fn confirm(&self, message: &str) -> bool;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};

    use super::{AppRoute, Confirm, Navigator};

    /// Navigation call seen by [`RecordingNavigator`].
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub(crate) enum NavEvent {
        Push(AppRoute),
        Back,
        Reload,
    }

    #[derive(Debug, Default)]
    pub(crate) struct RecordingNavigator {
        events: RefCell<Vec<NavEvent>>,
    }

    impl RecordingNavigator {
        pub(crate) fn events(&self) -> Vec<NavEvent> {
            self.events.borrow().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn push(&self, route: AppRoute) {
            self.events.borrow_mut().push(NavEvent::Push(route));
        }

        fn back(&self) {
            self.events.borrow_mut().push(NavEvent::Back);
        }

        fn reload(&self) {
            self.events.borrow_mut().push(NavEvent::Reload);
        }
    }

    /// Answers every prompt with a fixed reply and remembers the last message.
    #[derive(Debug)]
    pub(crate) struct ScriptedConfirm {
        answer: bool,
        asked: Cell<usize>,
        last_message: RefCell<Option<String>>,
    }

    impl ScriptedConfirm {
        pub(crate) const fn answering(answer: bool) -> Self {
            Self {
                answer,
                asked: Cell::new(0),
                last_message: RefCell::new(None),
            }
        }

        pub(crate) fn asked(&self) -> usize {
            self.asked.get()
        }

        pub(crate) fn last_message(&self) -> Option<String> {
            self.last_message.borrow().clone()
        }
    }

    impl Confirm for ScriptedConfirm {
        fn confirm(&self, message: &str) -> bool {
            self.asked.set(self.asked.get() + 1);
            *self.last_message.borrow_mut() = Some(message.to_string());
            self.answer
        }
    }
}
