//! Detail page loading and deletion.

use recipebox_api_models::{MISSING_AUTHOR_MESSAGE, Recipe, RecipeId};
use recipebox_client::{CancelToken, RecipeClient, Transport};

use crate::core::nav::{Confirm, Navigator};
use crate::core::report::report_failure;
use crate::core::routes::AppRoute;
use crate::features::detail::actions::delete_prompt;
use crate::features::detail::state::DetailAction;

/// Prefix for load failures shown to the user.
pub const LOAD_FAILED_PREFIX: &str = "Failed to load recipe: ";
/// Prefix for delete failures shown to the user.
pub const DELETE_FAILED_PREFIX: &str = "Failed to delete recipe: ";

/// How a delete attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the prompt; nothing was sent.
    Declined,
    /// No author name was available; nothing was sent.
    MissingAuthor,
    /// The server deleted the recipe and the list page was opened.
    Deleted,
    /// The server rejected the delete or the request failed.
    Failed,
    /// The token fired before the server answered.
    Cancelled,
}

/// Fetch recipe `id` and report progress through `emit`.
///
/// Nothing is emitted once `cancel` has fired.
pub async fn load_recipe<T: Transport>(
    client: &RecipeClient<T>,
    id: &RecipeId,
    cancel: &CancelToken,
    emit: impl Fn(DetailAction),
) {
    if cancel.is_cancelled() {
        return;
    }
    emit(DetailAction::LoadStarted);
    match client.get_recipe(id, cancel).await {
        Ok(recipe) => emit(DetailAction::Loaded(recipe)),
        Err(err) if err.is_cancelled() => {
            tracing::debug!(recipe_id = %id, "recipe load cancelled");
        }
        Err(err) if err.is_not_found() => emit(DetailAction::NotFound),
        Err(err) => {
            report_failure(&format!("recipe {id} load"), &err);
            emit(DetailAction::LoadFailed(format!("{LOAD_FAILED_PREFIX}{err}")));
        }
    }
}

/// Confirm, then delete `recipe` on behalf of its author.
///
/// Navigates to the list page only after the server accepted the delete.
pub async fn delete_recipe<T: Transport>(
    client: &RecipeClient<T>,
    recipe: &Recipe,
    confirm: &impl Confirm,
    navigator: &impl Navigator,
    cancel: &CancelToken,
    emit: impl Fn(DetailAction),
) -> DeleteOutcome {
    if !confirm.confirm(&delete_prompt(&recipe.name)) {
        return DeleteOutcome::Declined;
    }
    let Some(author_name) = recipe.author_display_name() else {
        emit(DetailAction::DeleteFailed(MISSING_AUTHOR_MESSAGE.to_string()));
        return DeleteOutcome::MissingAuthor;
    };

    emit(DetailAction::DeleteStarted);
    match client.delete_recipe(&recipe.id, author_name, cancel).await {
        Ok(()) => {
            tracing::info!(recipe_id = %recipe.id, "recipe deleted");
            navigator.push(AppRoute::List);
            DeleteOutcome::Deleted
        }
        Err(err) if err.is_cancelled() => DeleteOutcome::Cancelled,
        Err(err) => {
            report_failure(&format!("recipe {} delete", recipe.id), &err);
            emit(DetailAction::DeleteFailed(format!("{DELETE_FAILED_PREFIX}{err}")));
            DeleteOutcome::Failed
        }
    }
}
