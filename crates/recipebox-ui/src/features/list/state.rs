//! List page state.
//!
//! # Design
//! - Exactly one of loading, loaded or failed at a time.
//! - Server order is preserved; no client-side sorting.

use recipebox_api_models::RecipeListItem;

/// Load lifecycle of the recipe list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListState {
    /// Request in flight.
    #[default]
    Loading,
    /// Recipes as returned by the server.
    Ready(Vec<RecipeListItem>),
    /// Load failed with a user-facing message.
    Failed(String),
}

/// Transitions applied to [`ListState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListAction {
    /// A fetch started.
    LoadStarted,
    /// The fetch succeeded.
    Loaded(Vec<RecipeListItem>),
    /// The fetch failed.
    LoadFailed(String),
}

impl ListState {
    /// Apply one transition.
    pub fn apply(&mut self, action: ListAction) {
        *self = match action {
            ListAction::LoadStarted => Self::Loading,
            ListAction::Loaded(recipes) => Self::Ready(recipes),
            ListAction::LoadFailed(message) => Self::Failed(message),
        };
    }

    /// Loaded recipes, empty while loading or after a failure.
    #[must_use]
    pub fn recipes(&self) -> &[RecipeListItem] {
        match self {
            Self::Ready(recipes) => recipes,
            Self::Loading | Self::Failed(_) => &[],
        }
    }

    /// Whether the list loaded and is empty.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::Ready(recipes) if recipes.is_empty())
    }
}
