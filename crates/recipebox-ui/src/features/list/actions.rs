//! List page intents.
//!
//! # Design
//! - Intents map to navigation only; loading is driven by the page mount.

use recipebox_api_models::RecipeId;

use crate::core::nav::Navigator;
use crate::core::routes::AppRoute;

/// What the user asked the list page to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListIntent {
    /// Open a recipe's detail page.
    Open(RecipeId),
    /// Start a new recipe.
    CreateNew,
    /// Reload the page after a failed fetch.
    Retry,
}

/// Carry out `intent` through `navigator`.
pub fn handle_list_intent(intent: ListIntent, navigator: &impl Navigator) {
    match intent {
        ListIntent::Open(id) => navigator.push(AppRoute::Detail(id)),
        ListIntent::CreateNew => navigator.push(AppRoute::NewRecipe),
        ListIntent::Retry => navigator.reload(),
    }
}
