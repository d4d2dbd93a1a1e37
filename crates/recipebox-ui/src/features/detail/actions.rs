//! Detail page intents.

use recipebox_api_models::RecipeId;

use crate::core::nav::Navigator;
use crate::core::routes::AppRoute;

/// Navigation requested from the detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailIntent {
    /// Return to the recipe list.
    BackToList,
    /// Open the edit form for the recipe.
    Edit(RecipeId),
}

/// Carry out `intent` through `navigator`.
pub fn handle_detail_intent(intent: DetailIntent, navigator: &impl Navigator) {
    match intent {
        DetailIntent::BackToList => navigator.push(AppRoute::List),
        DetailIntent::Edit(id) => navigator.push(AppRoute::Edit(id)),
    }
}

/// Prompt shown before deleting a recipe.
#[must_use]
pub fn delete_prompt(recipe_name: &str) -> String {
    format!("Are you sure you want to delete \"{recipe_name}\"?")
}
