//! Recipe client context shared by every page.
//!
//! # Design
//! - Create exactly one client per app boot.

use std::rc::Rc;

use recipebox_client::{ClientConfig, RecipeClient};

use crate::services::transport::FetchTransport;

/// Client type used by the browser build.
pub(crate) type AppClient = RecipeClient<FetchTransport>;

/// Shared client context.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton client instance.
    pub client: Rc<AppClient>,
}

impl ApiCtx {
    /// Build the context from a resolved configuration.
    pub(crate) fn new(config: ClientConfig) -> Self {
        Self {
            client: Rc::new(RecipeClient::new(config, FetchTransport)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
