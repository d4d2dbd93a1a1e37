//! Browser implementations of the navigation and confirmation seams.

use gloo::console;
use gloo::utils::window;
use yew_router::prelude::Navigator as RouterNavigator;

use crate::app::routes::Route;
use crate::core::nav::{Confirm, Navigator};
use crate::core::routes::AppRoute;

/// History-backed navigator.
#[derive(Clone)]
pub(crate) struct BrowserNavigator {
    inner: Option<RouterNavigator>,
}

impl BrowserNavigator {
    pub(crate) const fn new(inner: Option<RouterNavigator>) -> Self {
        Self { inner }
    }
}

impl Navigator for BrowserNavigator {
    fn push(&self, route: AppRoute) {
        match &self.inner {
            Some(navigator) => navigator.push(&Route::from(route)),
            None => console::warn!("navigation requested outside the router"),
        }
    }

    fn back(&self) {
        if let Some(navigator) = &self.inner {
            navigator.back();
        }
    }

    fn reload(&self) {
        if let Err(err) = window().location().reload() {
            console::error!("page reload failed", err);
        }
    }
}

/// `window.confirm` prompt.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }
}
