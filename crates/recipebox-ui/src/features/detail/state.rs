//! Detail page state.
//!
//! # Design
//! - Load outcome and delete progress are tracked separately so a failed
//!   delete keeps the recipe on screen.
//! - Not found is its own outcome, distinct from other failures.

use recipebox_api_models::Recipe;

/// Load lifecycle of a single recipe.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DetailPhase {
    /// Request in flight.
    #[default]
    Loading,
    /// Recipe loaded.
    Ready(Recipe),
    /// The server answered 404.
    NotFound,
    /// Load failed with a user-facing message.
    Failed(String),
}

/// Full detail page state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailState {
    /// Load outcome.
    pub phase: DetailPhase,
    /// A delete request is in flight.
    pub deleting: bool,
    /// Error from the last delete attempt.
    pub action_error: Option<String>,
}

/// Transitions applied to [`DetailState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailAction {
    /// A fetch started; previous outcome and errors are discarded.
    LoadStarted,
    /// The fetch succeeded.
    Loaded(Recipe),
    /// The recipe does not exist.
    NotFound,
    /// The fetch failed.
    LoadFailed(String),
    /// A delete request started.
    DeleteStarted,
    /// The delete was refused locally or by the server.
    DeleteFailed(String),
}

impl DetailState {
    /// Apply one transition.
    pub fn apply(&mut self, action: DetailAction) {
        match action {
            DetailAction::LoadStarted => *self = Self::default(),
            DetailAction::Loaded(recipe) => self.phase = DetailPhase::Ready(recipe),
            DetailAction::NotFound => self.phase = DetailPhase::NotFound,
            DetailAction::LoadFailed(message) => self.phase = DetailPhase::Failed(message),
            DetailAction::DeleteStarted => {
                self.deleting = true;
                self.action_error = None;
            }
            DetailAction::DeleteFailed(message) => {
                self.deleting = false;
                self.action_error = Some(message);
            }
        }
    }

    /// Loaded recipe, if any.
    #[must_use]
    pub const fn recipe(&self) -> Option<&Recipe> {
        match &self.phase {
            DetailPhase::Ready(recipe) => Some(recipe),
            _ => None,
        }
    }
}
